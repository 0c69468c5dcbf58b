//! Exit-condition quality.
//!
//! Exit conditions must exist, avoid vague adjectives, and at least one must
//! point at something checkable (a file, a path, a command, a pass/fail
//! outcome, or a score).

use crate::roadmap::{unit_location, Roadmap};
use crate::scrutiny::patterns::{references_artifact, vague_adjective};
use crate::scrutiny::{Checker, CheckerId, Gap, GapCategory, GapIds, Severity};

/// Flags missing, vague, or unverifiable exit conditions.
pub struct ExitConditionQualityCheck;

impl Checker for ExitConditionQualityCheck {
    fn id(&self) -> CheckerId {
        CheckerId::new("exit-condition-quality")
    }

    fn name(&self) -> &str {
        "Exit Condition Quality"
    }

    fn description(&self) -> &str {
        "Ensures exit conditions are present, precise, and verifiable"
    }

    fn category(&self) -> GapCategory {
        GapCategory::MissingExitConditions
    }

    fn default_severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
        let mut gaps = Vec::new();

        for (phase, unit) in roadmap.units() {
            let location = unit_location(phase, unit);

            if unit.exit_conditions.is_empty() {
                gaps.push(
                    Gap::new(
                        ids.next_id(),
                        self.category(),
                        Severity::Major,
                        location.clone(),
                        format!("Unit {} has no exit conditions", location),
                    )
                    .with_suggestion("Add at least one verifiable exit condition"),
                );
                continue;
            }

            for condition in &unit.exit_conditions {
                if let Some(adjective) = vague_adjective(condition) {
                    gaps.push(
                        Gap::new(
                            ids.next_id(),
                            self.category(),
                            Severity::Major,
                            location.clone(),
                            format!(
                                "Unit {} exit condition '{}' relies on the vague word '{}'",
                                location, condition, adjective
                            ),
                        )
                        .with_suggestion("Replace the adjective with a measurable criterion"),
                    );
                }
            }

            if !unit.exit_conditions.iter().any(|c| references_artifact(c)) {
                gaps.push(
                    Gap::new(
                        ids.next_id(),
                        self.category(),
                        Severity::Minor,
                        location.clone(),
                        format!(
                            "Unit {} has no exit condition referencing a concrete artifact",
                            location
                        ),
                    )
                    .with_suggestion(
                        "Reference a file, command, or pass/fail result in an exit condition",
                    ),
                );
            }
        }

        gaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrutiny::testing::{clean_unit, roadmap};

    fn unit_with(conditions: &[&str]) -> crate::roadmap::Unit {
        let mut unit = clean_unit("U-1");
        unit.exit_conditions = conditions.iter().map(|c| c.to_string()).collect();
        unit
    }

    #[test]
    fn concrete_condition_passes() {
        let gaps = ExitConditionQualityCheck.check(
            &roadmap(vec![unit_with(&["cargo test passes", "docs/api.md written"])]),
            &mut GapIds::new(),
        );
        assert!(gaps.is_empty());
    }

    #[test]
    fn empty_list_is_single_major() {
        let gaps =
            ExitConditionQualityCheck.check(&roadmap(vec![unit_with(&[])]), &mut GapIds::new());

        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].severity, Severity::Major);
    }

    #[test]
    fn vague_condition_is_major_and_unverifiable_is_minor() {
        let gaps = ExitConditionQualityCheck.check(
            &roadmap(vec![unit_with(&["Code quality is good"])]),
            &mut GapIds::new(),
        );

        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].severity, Severity::Major);
        assert!(gaps[0].description.contains("'good'"));
        assert_eq!(gaps[1].severity, Severity::Minor);
    }

    #[test]
    fn one_concrete_condition_covers_the_list() {
        let gaps = ExitConditionQualityCheck.check(
            &roadmap(vec![unit_with(&["Stakeholders informed", "npm run build succeeds"])]),
            &mut GapIds::new(),
        );
        assert!(gaps.is_empty());
    }
}
