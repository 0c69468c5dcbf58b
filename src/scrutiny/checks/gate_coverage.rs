//! Gate coverage.

use crate::roadmap::Roadmap;
use crate::scrutiny::{Checker, CheckerId, Gap, GapCategory, GapIds, Severity};

/// Ensures every phase carries a gate that demands tests, a build, and a
/// positive score floor.
pub struct GateCoverageCheck;

impl Checker for GateCoverageCheck {
    fn id(&self) -> CheckerId {
        CheckerId::new("gate-coverage")
    }

    fn name(&self) -> &str {
        "Gate Coverage"
    }

    fn description(&self) -> &str {
        "Ensures each phase has a gate requiring tests, a build, and a score floor"
    }

    fn category(&self) -> GapCategory {
        GapCategory::MissingTests
    }

    fn default_severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
        let mut gaps = Vec::new();

        for phase in &roadmap.phases {
            let Some(gate) = &phase.gate else {
                gaps.push(
                    Gap::new(
                        ids.next_id(),
                        self.category(),
                        Severity::Major,
                        phase.id.clone(),
                        format!("Phase {} has no gate", phase.id),
                    )
                    .with_suggestion(
                        "Add a gate with omega_floor, test_required, and build_required",
                    ),
                );
                continue;
            };

            let mut weak = |problem: &str, suggestion: &str| {
                gaps.push(
                    Gap::new(
                        ids.next_id(),
                        GapCategory::MissingTests,
                        Severity::Minor,
                        phase.id.clone(),
                        format!("Phase {} gate {}", phase.id, problem),
                    )
                    .with_suggestion(suggestion),
                );
            };

            if gate.omega_floor <= 0.0 {
                weak("has no positive omega_floor", "Set omega_floor above zero");
            }
            if !gate.test_required {
                weak("does not require tests", "Set test_required to true");
            }
            if !gate.build_required {
                weak("does not require a build", "Set build_required to true");
            }
        }

        gaps
    }
}
