//! Role and model alignment.
//!
//! Each canonical role code is expected to run on a model of a particular
//! family. Documentation roles running on a larger family are only a minor
//! gap; any other mismatch is major.

use crate::roadmap::{unit_location, Roadmap};
use crate::scrutiny::patterns::{expected_family, family_tier, is_documentation_role, model_tier};
use crate::scrutiny::{Checker, CheckerId, Gap, GapCategory, GapIds, Severity};

/// Flags units whose model does not belong to the family their role expects.
pub struct RoleModelAlignmentCheck;

impl Checker for RoleModelAlignmentCheck {
    fn id(&self) -> CheckerId {
        CheckerId::new("role-model-alignment")
    }

    fn name(&self) -> &str {
        "Role/Model Alignment"
    }

    fn description(&self) -> &str {
        "Ensures each unit's model belongs to the family its role expects"
    }

    fn category(&self) -> GapCategory {
        GapCategory::RoleMismatch
    }

    fn default_severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
        let mut gaps = Vec::new();

        for (phase, unit) in roadmap.units() {
            // Unknown roles and missing models are left to schema completeness
            let Some(family) = expected_family(&unit.role) else {
                continue;
            };
            if unit.model.trim().is_empty() || unit.model.to_lowercase().contains(family) {
                continue;
            }

            let oversized = match (model_tier(&unit.model), family_tier(family)) {
                (Some(actual), Some(expected)) => actual > expected,
                _ => false,
            };
            let severity = if is_documentation_role(&unit.role) && oversized {
                Severity::Minor
            } else {
                Severity::Major
            };

            let location = unit_location(phase, unit);
            gaps.push(
                Gap::new(
                    ids.next_id(),
                    self.category(),
                    severity,
                    location.clone(),
                    format!(
                        "Unit {} has role '{}' (expects a {} model) but uses '{}'",
                        location, unit.role, family, unit.model
                    ),
                )
                .with_suggestion(format!("Assign a {} model to this unit", family)),
            );
        }

        gaps
    }
}
