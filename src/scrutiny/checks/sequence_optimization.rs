//! Sequence optimization.
//!
//! Adjacent units in a phase that do not depend on each other could run in
//! parallel; each such pair is reported as a hint to reorganize.

use crate::roadmap::{unit_location, Roadmap, Unit};
use crate::scrutiny::{Checker, CheckerId, Gap, GapCategory, GapIds, Severity};

/// Suggests parallelizing independent consecutive units.
pub struct SequenceOptimizationCheck;

impl Checker for SequenceOptimizationCheck {
    fn id(&self) -> CheckerId {
        CheckerId::new("sequence-optimization")
    }

    fn name(&self) -> &str {
        "Sequence Optimization"
    }

    fn description(&self) -> &str {
        "Finds consecutive units in a phase that could run in parallel"
    }

    fn category(&self) -> GapCategory {
        GapCategory::SequenceErrors
    }

    fn default_severity(&self) -> Severity {
        Severity::Minor
    }

    fn check(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
        let mut gaps = Vec::new();

        for phase in &roadmap.phases {
            let mut ordered: Vec<&Unit> = phase.units.iter().collect();
            ordered.sort_by_key(|u| u.sequence);

            for pair in ordered.windows(2) {
                let (first, second) = (pair[0], pair[1]);
                if first.depends_on(&second.id) || second.depends_on(&first.id) {
                    continue;
                }
                let first_loc = unit_location(phase, first);
                let second_loc = unit_location(phase, second);
                gaps.push(
                    Gap::new(
                        ids.next_id(),
                        self.category(),
                        self.default_severity(),
                        format!("{},{}", first_loc, second_loc),
                        format!(
                            "Units {} and {} are independent and could run in parallel",
                            first_loc, second_loc
                        ),
                    )
                    .with_suggestion(
                        "Run the units in parallel, or add the dependency that orders them",
                    ),
                );
            }
        }

        gaps
    }
}
