//! Step specificity.
//!
//! Step instructions should be committed, imperative, and backed by at least
//! one tool call.

use crate::roadmap::{unit_location, Roadmap};
use crate::scrutiny::patterns::{hedge_phrase, is_placeholder, starts_with_imperative};
use crate::scrutiny::{Checker, CheckerId, Gap, GapCategory, GapIds, Severity};

/// Flags underspecified step instructions.
pub struct StepSpecificityCheck;

impl Checker for StepSpecificityCheck {
    fn id(&self) -> CheckerId {
        CheckerId::new("step-specificity")
    }

    fn name(&self) -> &str {
        "Step Specificity"
    }

    fn description(&self) -> &str {
        "Ensures steps are imperative, committed, and tool-backed"
    }

    fn category(&self) -> GapCategory {
        GapCategory::UnderspecifiedSteps
    }

    fn default_severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
        let mut gaps = Vec::new();

        for (phase, unit) in roadmap.units() {
            let location = unit_location(phase, unit);

            for step in &unit.steps {
                let mut push = |severity: Severity, problem: String, suggestion: &str| {
                    gaps.push(
                        Gap::new(
                            ids.next_id(),
                            GapCategory::UnderspecifiedSteps,
                            severity,
                            location.clone(),
                            format!("Unit {} step {} {}", location, step.number, problem),
                        )
                        .with_suggestion(suggestion),
                    );
                };

                if is_placeholder(&step.instruction) {
                    push(
                        Severity::Major,
                        "has no instruction".to_string(),
                        "Write a concrete instruction for this step",
                    );
                    continue;
                }

                if let Some(phrase) = hedge_phrase(&step.instruction) {
                    push(
                        Severity::Major,
                        format!("hedges with '{}'", phrase),
                        "State the action to take instead of suggesting one",
                    );
                }

                if !starts_with_imperative(&step.instruction) {
                    push(
                        Severity::Minor,
                        "does not start with an imperative verb".to_string(),
                        "Start the instruction with a verb such as 'Create' or 'Run'",
                    );
                }

                if step.tool_calls.is_empty() {
                    push(
                        Severity::Minor,
                        "has no tool calls".to_string(),
                        "List the tool calls this step performs",
                    );
                }
            }
        }

        gaps
    }
}
