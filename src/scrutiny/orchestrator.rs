//! Convergence loop.
//!
//! A [`Scrutinizer`] runs repeated passes of check, score, and auto-fix over a
//! working copy of a roadmap. The loop stops when a pass past `min_passes`
//! converges (the unresolved count barely moved, or the score cleared the
//! threshold) or when `max_passes` is reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::fix::FixEngine;
use super::gap::unresolved_count;
use super::ids::GapIds;
use super::registry::CheckerRegistry;
use super::score::{score_gaps, CHECKS_PER_UNIT};
use super::{Gap, Severity};
use crate::config::{PassMode, ScrutinyConfig};
use crate::roadmap::Roadmap;

/// Suggestion given to an escalated gap that had none.
const ESCALATION_FALLBACK: &str = "Requires human review";

/// Record of one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrutinyPass {
    pub pass: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Every gap found this pass. Gaps repaired by auto-fix are marked
    /// resolved after scoring.
    pub gaps: Vec<Gap>,
    pub score: f64,
    /// Unit count times twelve.
    pub total_checks: usize,
    /// Unresolved gaps at scoring time.
    pub unresolved: usize,
    /// Fixes applied after this pass.
    pub fixes_applied: usize,
    pub converged: bool,
}

/// Counts of gaps by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
    pub info: usize,
}

impl SeverityCounts {
    pub fn from_gaps<'a>(gaps: impl IntoIterator<Item = &'a Gap>) -> Self {
        let mut counts = Self::default();
        for gap in gaps {
            match gap.severity {
                Severity::Critical => counts.critical += 1,
                Severity::Major => counts.major += 1,
                Severity::Minor => counts.minor += 1,
                Severity::Info => counts.info += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.critical + self.major + self.minor + self.info
    }
}

/// Final report of a scrutiny run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrutinyLog {
    pub roadmap_id: String,
    pub passes: Vec<ScrutinyPass>,
    pub final_score: f64,
    /// Score at or above the threshold and no unresolved CRITICAL gap.
    pub passed: bool,
    /// Unresolved gaps of the final pass.
    pub unresolved_gaps: Vec<Gap>,
}

impl ScrutinyLog {
    pub fn last_pass(&self) -> Option<&ScrutinyPass> {
        self.passes.last()
    }

    /// Whether the loop stopped on convergence rather than the cap.
    pub fn converged(&self) -> bool {
        self.last_pass().is_some_and(|p| p.converged)
    }

    pub fn severity_counts(&self) -> SeverityCounts {
        SeverityCounts::from_gaps(&self.unresolved_gaps)
    }
}

/// A log together with the last roadmap the loop evaluated.
#[derive(Debug, Clone)]
pub struct ScrutinyReport {
    pub log: ScrutinyLog,
    /// The working copy after every adopted auto-fix.
    pub roadmap: Roadmap,
}

/// Drives the scrutiny loop.
pub struct Scrutinizer {
    config: ScrutinyConfig,
    registry: CheckerRegistry,
    fixer: FixEngine,
}

impl Scrutinizer {
    /// Create a scrutinizer with the built-in checkers configured by `config`.
    pub fn new(config: ScrutinyConfig) -> Self {
        let registry = CheckerRegistry::from_config(&config);
        Self::with_registry(config, registry)
    }

    /// Create a scrutinizer running a custom set of checkers.
    pub fn with_registry(config: ScrutinyConfig, registry: CheckerRegistry) -> Self {
        Self {
            config,
            registry,
            fixer: FixEngine::new(),
        }
    }

    pub fn config(&self) -> &ScrutinyConfig {
        &self.config
    }

    pub fn registry(&self) -> &CheckerRegistry {
        &self.registry
    }

    /// Run every checker for one pass with a fresh id counter, drop gaps in
    /// categories outside the configured roster, and apply escalation.
    pub fn run_pass(&self, roadmap: &Roadmap, pass: u32) -> Vec<Gap> {
        let mut ids = GapIds::new();
        let mut gaps: Vec<Gap> = self
            .registry
            .run_all(roadmap, &mut ids)
            .into_iter()
            .filter(|g| self.config.reports(g.category))
            .collect();

        if pass >= self.config.escalation_rule.from_pass {
            let escalated = self.escalate(&mut gaps);
            if escalated > 0 {
                tracing::warn!(
                    "Pass {}: {} gap(s) escalated for human review",
                    pass,
                    escalated
                );
            }
        }

        gaps
    }

    /// Prefix the suggestion of every unresolved gap at or above the
    /// escalation severity with the marker, once. Returns how many gaps carry
    /// the marker.
    fn escalate(&self, gaps: &mut [Gap]) -> usize {
        let rule = &self.config.escalation_rule;
        let mut escalated = 0;

        for gap in gaps
            .iter_mut()
            .filter(|g| !g.resolved && g.severity >= rule.severity)
        {
            let suggestion = match gap.suggestion.take() {
                Some(s) if s.starts_with(&rule.marker) => s,
                Some(s) => format!("{} {}", rule.marker, s),
                None => format!("{} {}", rule.marker, ESCALATION_FALLBACK),
            };
            gap.suggestion = Some(suggestion);
            escalated += 1;
        }

        escalated
    }

    fn has_converged(
        &self,
        pass: u32,
        unresolved: usize,
        score: f64,
        previous: Option<&ScrutinyPass>,
    ) -> bool {
        if pass < self.config.min_passes {
            return false;
        }
        if score >= self.config.improvement_threshold {
            return true;
        }
        previous.is_some_and(|p| {
            unresolved.abs_diff(p.unresolved) < self.config.convergence_rule.delta_below
        })
    }

    /// Run the loop over a copy of `roadmap`.
    pub fn run(&self, roadmap: &Roadmap) -> ScrutinyReport {
        let iterative = self.config.pass_mode == PassMode::Iterative;
        // At least one pass always runs, so the verdict is never vacuous.
        let max_passes = if iterative {
            self.config.max_passes.max(1)
        } else {
            1
        };

        let mut current = roadmap.clone();
        let mut passes: Vec<ScrutinyPass> = Vec::new();

        for pass in 1..=max_passes {
            let started_at = Utc::now();
            let mut gaps = self.run_pass(&current, pass);
            let unit_count = current.unit_count();
            let score = score_gaps(&gaps, unit_count);
            let unresolved = unresolved_count(&gaps);
            let converged = self.has_converged(pass, unresolved, score, passes.last());

            tracing::info!(
                "Pass {}: {} gap(s), {} unresolved, score {:.3}",
                pass,
                gaps.len(),
                unresolved,
                score
            );

            let mut fixes_applied = 0;
            if iterative && !converged && pass < max_passes {
                let result = self.fixer.auto_fix(&current, &gaps, pass);
                fixes_applied = result.applied();
                if fixes_applied > 0 {
                    for fixed in result.applied_gaps {
                        if let Some(gap) = gaps.iter_mut().find(|g| g.id == fixed.id) {
                            *gap = fixed;
                        }
                    }
                    current = result.fixed_roadmap;
                    tracing::debug!("Pass {}: adopted {} fix(es)", pass, fixes_applied);
                }
            }

            passes.push(ScrutinyPass {
                pass,
                started_at,
                finished_at: Utc::now(),
                gaps,
                score,
                total_checks: unit_count * CHECKS_PER_UNIT,
                unresolved,
                fixes_applied,
                converged,
            });

            if converged {
                tracing::info!("Converged at pass {}", pass);
                break;
            }
        }

        if passes.last().is_some_and(|p| !p.converged) && iterative {
            tracing::info!("Stopped at the {} pass cap", max_passes);
        }

        let log = self.finish(&current, passes);
        ScrutinyReport {
            log,
            roadmap: current,
        }
    }

    fn finish(&self, roadmap: &Roadmap, passes: Vec<ScrutinyPass>) -> ScrutinyLog {
        let (final_score, unresolved_gaps) = match passes.last() {
            Some(last) => (
                last.score,
                last.gaps.iter().filter(|g| !g.resolved).cloned().collect::<Vec<_>>(),
            ),
            None => (score_gaps(&[], roadmap.unit_count()), Vec::new()),
        };
        let passed = final_score >= self.config.improvement_threshold
            && !unresolved_gaps.iter().any(Gap::is_blocking);

        ScrutinyLog {
            roadmap_id: roadmap.id.clone(),
            passes,
            final_score,
            passed,
            unresolved_gaps,
        }
    }
}

/// Scrutinize `roadmap` with the built-in checkers.
///
/// The caller's roadmap is never modified.
pub fn scrutinize(roadmap: &Roadmap, config: &ScrutinyConfig) -> ScrutinyLog {
    Scrutinizer::new(config.clone()).run(roadmap).log
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::Deliverable;
    use crate::scrutiny::testing::{clean_unit, roadmap};
    use crate::scrutiny::{Checker, CheckerId, GapCategory};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn vague_rollback_roadmap() -> Roadmap {
        let mut unit = clean_unit("U-1");
        unit.rollback = "Revert".to_string();
        roadmap(vec![unit])
    }

    fn hook_roadmap() -> Roadmap {
        let mut unit = clean_unit("U-1");
        unit.deliverables = vec![Deliverable {
            path: "hooks/on-save.ts".to_string(),
            kind: "source".to_string(),
            description: "Save hook".to_string(),
        }];
        roadmap(vec![unit])
    }

    fn dangling_roadmap() -> Roadmap {
        let mut unit = clean_unit("U-1");
        unit.dependencies = vec!["X-999".to_string()];
        roadmap(vec![unit])
    }

    /// Emits two more gaps on every call, so the unresolved count never settles.
    struct GrowingChecker {
        calls: AtomicUsize,
    }

    impl Checker for GrowingChecker {
        fn id(&self) -> CheckerId {
            CheckerId::new("growing")
        }
        fn name(&self) -> &str {
            "Growing"
        }
        fn description(&self) -> &str {
            "Reports more each time"
        }
        fn category(&self) -> GapCategory {
            GapCategory::EffortMismatch
        }
        fn default_severity(&self) -> Severity {
            Severity::Minor
        }
        fn check(&self, _roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
            let calls = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            (0..calls * 2)
                .map(|_| Gap::new(ids.next_id(), self.category(), Severity::Minor, "U-1", "d"))
                .collect()
        }
    }

    #[test]
    fn clean_roadmap_converges_at_min_passes_and_passes() {
        let log = scrutinize(&roadmap(vec![clean_unit("U-1")]), &ScrutinyConfig::default());

        assert_eq!(log.passes.len(), 3);
        assert!(log.converged());
        assert_eq!(log.final_score, 1.0);
        assert!(log.passed);
        assert!(log.unresolved_gaps.is_empty());
        assert_eq!(log.roadmap_id, "RM-TEST");
    }

    #[test]
    fn stable_gap_count_converges_at_pass_three() {
        let log = scrutinize(&vague_rollback_roadmap(), &ScrutinyConfig::default());

        assert_eq!(log.passes.len(), 3);
        assert!(!log.passes[0].converged);
        assert!(!log.passes[1].converged);
        assert!(log.passes[2].converged);
        assert_eq!(log.unresolved_gaps.len(), 1);
        // 1 - 1/12 is below 0.92
        assert!(!log.passed);
    }

    #[test]
    fn auto_fix_is_adopted_for_the_next_pass() {
        let original = hook_roadmap();
        let report = Scrutinizer::new(ScrutinyConfig::default()).run(&original);
        let log = &report.log;

        assert_eq!(log.passes[0].fixes_applied, 1);
        assert_eq!(log.passes[0].unresolved, 1);
        assert!(log.passes[0].gaps[0].resolved);
        assert_eq!(log.passes[0].gaps[0].resolved_in_pass, Some(1));
        assert!(log.passes[1].gaps.is_empty());
        assert!(report.roadmap.unit("U-1").unwrap().creates_hook);
        assert!(!original.unit("U-1").unwrap().creates_hook);
        assert!(log.passed);
    }

    #[test]
    fn escalation_marker_is_applied_once() {
        let config = ScrutinyConfig {
            min_passes: 5,
            ..Default::default()
        };
        let log = scrutinize(&dangling_roadmap(), &config);

        assert_eq!(log.passes.len(), 5);
        let critical = |pass: &ScrutinyPass| -> Vec<Gap> {
            pass.gaps
                .iter()
                .filter(|g| g.severity == Severity::Critical)
                .cloned()
                .collect()
        };

        for gap in critical(&log.passes[2]) {
            assert!(!gap.suggestion.unwrap_or_default().contains("[ESCALATED]"));
        }
        let fifth = critical(&log.passes[4]);
        assert!(!fifth.is_empty());
        for gap in fifth {
            let suggestion = gap.suggestion.unwrap();
            assert!(suggestion.starts_with("[ESCALATED] "));
            assert_eq!(suggestion.matches("[ESCALATED]").count(), 1);
        }
        assert!(!log.passed);
    }

    #[test]
    fn escalate_is_idempotent_on_the_same_gaps() {
        let scrutinizer = Scrutinizer::new(ScrutinyConfig::default());
        let mut gaps = scrutinizer.run_pass(&dangling_roadmap(), 4);

        scrutinizer.escalate(&mut gaps);

        let suggestion = gaps[0].suggestion.clone().unwrap();
        assert_eq!(suggestion.matches("[ESCALATED]").count(), 1);
    }

    #[test]
    fn escalation_fills_missing_suggestion() {
        let scrutinizer = Scrutinizer::new(ScrutinyConfig::default());
        let mut gaps = vec![Gap::new(
            "GAP-001",
            GapCategory::MissingDeps,
            Severity::Critical,
            "U-1",
            "d",
        )];

        assert_eq!(scrutinizer.escalate(&mut gaps), 1);
        assert_eq!(
            gaps[0].suggestion.as_deref(),
            Some("[ESCALATED] Requires human review")
        );
    }

    #[test]
    fn unsettled_counts_stop_at_the_cap() {
        let mut registry = CheckerRegistry::new();
        registry.register(Box::new(GrowingChecker {
            calls: AtomicUsize::new(0),
        }));
        let scrutinizer = Scrutinizer::with_registry(ScrutinyConfig::default(), registry);

        let log = scrutinizer.run(&roadmap(vec![clean_unit("U-1")])).log;

        assert_eq!(log.passes.len(), 7);
        assert!(log.passes.iter().all(|p| !p.converged));
        assert!(!log.converged());
    }

    #[test]
    fn zero_pass_cap_still_runs_one_pass() {
        let config = ScrutinyConfig {
            max_passes: 0,
            ..Default::default()
        };

        let log = scrutinize(&dangling_roadmap(), &config);

        assert_eq!(log.passes.len(), 1);
        assert_eq!(log.passes[0].fixes_applied, 0);
        assert!(log
            .unresolved_gaps
            .iter()
            .any(|g| g.severity == Severity::Critical));
        assert!(!log.passed);
    }

    #[test]
    fn gap_ids_restart_each_pass() {
        let log = scrutinize(&vague_rollback_roadmap(), &ScrutinyConfig::default());
        for pass in &log.passes {
            assert_eq!(pass.gaps[0].id, "GAP-001");
        }
    }

    #[test]
    fn pass_records_total_checks_and_times() {
        let log = scrutinize(
            &roadmap(vec![clean_unit("A"), clean_unit("B")]),
            &ScrutinyConfig::default(),
        );
        for pass in &log.passes {
            assert_eq!(pass.total_checks, 24);
            assert!(pass.finished_at >= pass.started_at);
        }
    }

    #[test]
    fn single_mode_runs_once_without_fixing() {
        let config = ScrutinyConfig {
            pass_mode: PassMode::Single,
            ..Default::default()
        };
        let report = Scrutinizer::new(config).run(&hook_roadmap());

        assert_eq!(report.log.passes.len(), 1);
        assert_eq!(report.log.passes[0].fixes_applied, 0);
        assert_eq!(report.log.unresolved_gaps.len(), 1);
        assert!(!report.roadmap.unit("U-1").unwrap().creates_hook);
    }

    #[test]
    fn categories_outside_roster_are_dropped() {
        let config = ScrutinyConfig {
            categories: vec![GapCategory::MissingDeps],
            ..Default::default()
        };
        let log = scrutinize(&vague_rollback_roadmap(), &config);

        assert!(log.unresolved_gaps.is_empty());
        assert!(log.passed);
    }

    #[test]
    fn critical_gap_fails_even_above_threshold() {
        // Many clean units keep the score high while one dependency dangles.
        let mut units: Vec<_> = (1..=10).map(|i| clean_unit(&format!("U-{i}"))).collect();
        for (i, unit) in units.iter_mut().enumerate().skip(1) {
            unit.sequence = i as u32 + 1;
            unit.dependencies = vec![format!("U-{i}")];
        }
        units[0].dependencies = vec!["X-999".to_string()];

        let log = scrutinize(&roadmap(units), &ScrutinyConfig::default());

        assert!(log.final_score >= 0.92);
        assert_eq!(log.severity_counts().critical, 1);
        assert!(!log.passed);
    }

    #[test]
    fn log_round_trips_through_json() {
        let log = scrutinize(&vague_rollback_roadmap(), &ScrutinyConfig::default());
        let json = serde_json::to_string(&log).unwrap();
        let back: ScrutinyLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
