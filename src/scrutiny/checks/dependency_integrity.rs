//! Dependency integrity.
//!
//! Detects dependencies on units that do not exist, and dependency cycles.
//! Cycles are found with Kahn's algorithm: every unit left with a positive
//! in-degree after the sort sits on, or behind, a cycle.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::roadmap::{unit_location, Roadmap};
use crate::scrutiny::{Checker, CheckerId, Gap, GapCategory, GapIds, Severity};

/// Detects dangling dependencies and dependency cycles.
pub struct DependencyIntegrityCheck;

impl DependencyIntegrityCheck {
    /// Unit ids that cannot be topologically ordered, in roadmap order.
    ///
    /// Edges run from a dependency to its dependent; dependencies on unknown
    /// units are ignored here.
    pub fn unsortable_units(roadmap: &Roadmap) -> Vec<String> {
        let mut order: Vec<&str> = Vec::new();
        for (_, unit) in roadmap.units() {
            if !unit.id.is_empty() && !order.contains(&unit.id.as_str()) {
                order.push(&unit.id);
            }
        }
        let existing: HashSet<&str> = order.iter().copied().collect();

        // Count incoming edges for each node
        let mut in_degree: HashMap<&str, usize> = order.iter().map(|id| (*id, 0)).collect();
        let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
        for (_, unit) in roadmap.units() {
            if unit.id.is_empty() {
                continue;
            }
            for dep in unit.dependencies.iter().map(String::as_str) {
                if !existing.contains(dep) {
                    continue;
                }
                if let Some(degree) = in_degree.get_mut(unit.id.as_str()) {
                    *degree += 1;
                }
                dependents.entry(dep).or_default().push(unit.id.as_str());
            }
        }

        // Start with nodes that have no dependencies
        let mut queue: VecDeque<&str> = order
            .iter()
            .copied()
            .filter(|id| in_degree.get(id) == Some(&0))
            .collect();
        let mut removed = 0;

        while let Some(id) = queue.pop_front() {
            removed += 1;
            if let Some(next) = dependents.get(id) {
                for dependent in next {
                    if let Some(degree) = in_degree.get_mut(dependent) {
                        *degree -= 1;
                        if *degree == 0 {
                            queue.push_back(*dependent);
                        }
                    }
                }
            }
        }

        if removed == order.len() {
            return Vec::new();
        }

        order
            .into_iter()
            .filter(|id| in_degree.get(id).is_some_and(|d| *d > 0))
            .map(str::to_string)
            .collect()
    }
}

impl Checker for DependencyIntegrityCheck {
    fn id(&self) -> CheckerId {
        CheckerId::new("dependency-integrity")
    }

    fn name(&self) -> &str {
        "Dependency Integrity"
    }

    fn description(&self) -> &str {
        "Ensures dependencies exist and form no cycle"
    }

    fn category(&self) -> GapCategory {
        GapCategory::MissingDeps
    }

    fn default_severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
        let mut gaps = Vec::new();
        let existing: HashSet<&str> = roadmap.units().map(|(_, u)| u.id.as_str()).collect();

        for (phase, unit) in roadmap.units() {
            for dep in &unit.dependencies {
                if existing.contains(dep.as_str()) {
                    continue;
                }
                let location = unit_location(phase, unit);
                gaps.push(
                    Gap::new(
                        ids.next_id(),
                        GapCategory::MissingDeps,
                        Severity::Critical,
                        location.clone(),
                        format!("Unit {} depends on unknown unit '{}'", location, dep),
                    )
                    .with_suggestion("Remove the dependency or add the missing unit"),
                );
            }
        }

        let cyclic = Self::unsortable_units(roadmap);
        if !cyclic.is_empty() {
            tracing::debug!("Dependency cycle involves {} unit(s)", cyclic.len());
            gaps.push(
                Gap::new(
                    ids.next_id(),
                    GapCategory::SequenceErrors,
                    Severity::Critical,
                    cyclic.join(","),
                    format!("Dependency cycle among units: {}", cyclic.join(", ")),
                )
                .with_suggestion("Break the cycle by removing one of the dependencies"),
            );
        }

        gaps
    }
}
