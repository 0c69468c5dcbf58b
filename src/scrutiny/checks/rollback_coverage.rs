//! Rollback coverage.

use crate::roadmap::{unit_location, Roadmap};
use crate::scrutiny::patterns::{is_placeholder, is_vague_rollback};
use crate::scrutiny::{Checker, CheckerId, Gap, GapCategory, GapIds, Severity};

/// Flags units without a concrete recovery instruction.
pub struct RollbackCoverageCheck;

impl Checker for RollbackCoverageCheck {
    fn id(&self) -> CheckerId {
        CheckerId::new("rollback-coverage")
    }

    fn name(&self) -> &str {
        "Rollback Coverage"
    }

    fn description(&self) -> &str {
        "Ensures every unit has a concrete rollback instruction"
    }

    fn category(&self) -> GapCategory {
        GapCategory::MissingRollback
    }

    fn default_severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
        let mut gaps = Vec::new();

        for (phase, unit) in roadmap.units() {
            let location = unit_location(phase, unit);

            if is_placeholder(&unit.rollback) {
                gaps.push(
                    Gap::new(
                        ids.next_id(),
                        self.category(),
                        Severity::Major,
                        location.clone(),
                        format!("Unit {} has no rollback instruction", location),
                    )
                    .with_suggestion("Describe how to restore the previous state"),
                );
            } else if is_vague_rollback(&unit.rollback) {
                gaps.push(
                    Gap::new(
                        ids.next_id(),
                        self.category(),
                        Severity::Minor,
                        location.clone(),
                        format!(
                            "Unit {} rollback '{}' does not say what to restore",
                            location,
                            unit.rollback.trim()
                        ),
                    )
                    .with_suggestion("Name the command or files that restore the previous state"),
                );
            }
        }

        gaps
    }
}
