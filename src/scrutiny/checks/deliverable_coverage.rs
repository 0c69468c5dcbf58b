//! Deliverable coverage.
//!
//! A unit must declare what it produces, and every file its steps mention
//! should appear among the declared deliverables.

use crate::roadmap::{unit_location, Deliverable, Roadmap};
use crate::scrutiny::patterns::path_tokens;
use crate::scrutiny::{Checker, CheckerId, Gap, GapCategory, GapIds, Severity};

/// Flags missing or incomplete deliverables and files mentioned only in steps.
pub struct DeliverableCoverageCheck;

impl DeliverableCoverageCheck {
    /// Whether a path token from step text matches a declared deliverable.
    fn is_declared(token: &str, deliverables: &[Deliverable]) -> bool {
        let token = token.trim_start_matches("./");
        deliverables.iter().any(|d| {
            let path = d.path.trim().trim_start_matches("./");
            !path.is_empty()
                && (token.ends_with(path)
                    || path.ends_with(token)
                    || path.contains(token)
                    || token.contains(path))
        })
    }
}

impl Checker for DeliverableCoverageCheck {
    fn id(&self) -> CheckerId {
        CheckerId::new("deliverable-coverage")
    }

    fn name(&self) -> &str {
        "Deliverable Coverage"
    }

    fn description(&self) -> &str {
        "Ensures deliverables are declared and cover files named in steps"
    }

    fn category(&self) -> GapCategory {
        GapCategory::OrphanedDeliverables
    }

    fn default_severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
        let mut gaps = Vec::new();

        for (phase, unit) in roadmap.units() {
            let location = unit_location(phase, unit);

            if unit.deliverables.is_empty() {
                gaps.push(
                    Gap::new(
                        ids.next_id(),
                        self.category(),
                        Severity::Major,
                        location.clone(),
                        format!("Unit {} declares no deliverables", location),
                    )
                    .with_suggestion("Declare the files or artifacts this unit produces"),
                );
                continue;
            }

            for (index, deliverable) in unit.deliverables.iter().enumerate() {
                if deliverable.path.trim().is_empty() {
                    gaps.push(
                        Gap::new(
                            ids.next_id(),
                            self.category(),
                            Severity::Major,
                            location.clone(),
                            format!("Unit {} deliverable {} has no path", location, index + 1),
                        )
                        .with_suggestion("Give the deliverable a concrete path"),
                    );
                }
                if deliverable.description.trim().is_empty() {
                    gaps.push(
                        Gap::new(
                            ids.next_id(),
                            self.category(),
                            Severity::Minor,
                            location.clone(),
                            format!(
                                "Unit {} deliverable '{}' has no description",
                                location, deliverable.path
                            ),
                        )
                        .with_suggestion("Describe what the deliverable contains"),
                    );
                }
            }

            let mut mentioned: Vec<String> = Vec::new();
            for step in &unit.steps {
                for token in path_tokens(&step.instruction) {
                    if !mentioned.contains(&token) {
                        mentioned.push(token);
                    }
                }
            }

            for token in mentioned
                .iter()
                .filter(|t| !Self::is_declared(t, &unit.deliverables))
            {
                gaps.push(
                    Gap::new(
                        ids.next_id(),
                        self.category(),
                        Severity::Minor,
                        location.clone(),
                        format!(
                            "Unit {} steps mention '{}' which is not a declared deliverable",
                            location, token
                        ),
                    )
                    .with_suggestion(format!("Add '{}' to the unit's deliverables", token)),
                );
            }
        }

        gaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::Step;
    use crate::scrutiny::testing::{clean_unit, roadmap};
    use serde_json::json;

    fn step(instruction: &str) -> Step {
        Step {
            number: 1,
            instruction: instruction.to_string(),
            tool_calls: vec![json!({"tool": "write_file"})],
        }
    }

    #[test]
    fn clean_unit_passes() {
        let gaps =
            DeliverableCoverageCheck.check(&roadmap(vec![clean_unit("U-1")]), &mut GapIds::new());
        assert!(gaps.is_empty());
    }

    #[test]
    fn no_deliverables_is_major() {
        let mut unit = clean_unit("U-1");
        unit.deliverables.clear();

        let gaps = DeliverableCoverageCheck.check(&roadmap(vec![unit]), &mut GapIds::new());

        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].severity, Severity::Major);
    }

    #[test]
    fn empty_path_and_description() {
        let mut unit = clean_unit("U-1");
        unit.deliverables.push(Deliverable::default());

        let gaps = DeliverableCoverageCheck.check(&roadmap(vec![unit]), &mut GapIds::new());

        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].severity, Severity::Major);
        assert_eq!(gaps[1].severity, Severity::Minor);
    }

    #[test]
    fn undeclared_step_file_is_minor() {
        let mut unit = clean_unit("U-1");
        unit.steps = vec![step("Write src/config.rs and update src/lib.rs")];

        let gaps = DeliverableCoverageCheck.check(&roadmap(vec![unit]), &mut GapIds::new());

        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].severity, Severity::Minor);
        assert!(gaps[0].description.contains("src/config.rs"));
    }

    #[test]
    fn suffix_match_counts_as_declared() {
        let mut unit = clean_unit("U-1");
        unit.steps = vec![step("Edit lib.rs"), step("Edit ./src/lib.rs again")];

        let gaps = DeliverableCoverageCheck.check(&roadmap(vec![unit]), &mut GapIds::new());

        assert!(gaps.is_empty());
    }
}
