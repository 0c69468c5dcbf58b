//! Schema completeness.
//!
//! Every unit must fill in its mandatory fields with real content.

use crate::roadmap::{unit_location, Roadmap, Unit};
use crate::scrutiny::patterns::is_placeholder;
use crate::scrutiny::{Checker, CheckerId, Gap, GapCategory, GapIds, Severity};

/// Mandatory unit fields, the severity of leaving each empty, and the
/// category the resulting gap is filed under.
pub const MANDATORY_FIELDS: &[(&str, Severity, GapCategory)] = &[
    ("id", Severity::Critical, GapCategory::SequenceErrors),
    ("title", Severity::Critical, GapCategory::UnderspecifiedSteps),
    ("role", Severity::Critical, GapCategory::RoleMismatch),
    ("role_name", Severity::Major, GapCategory::RoleMismatch),
    ("model", Severity::Major, GapCategory::RoleMismatch),
    ("phase", Severity::Major, GapCategory::SequenceErrors),
    ("steps", Severity::Major, GapCategory::UnderspecifiedSteps),
    ("deliverables", Severity::Major, GapCategory::OrphanedDeliverables),
    ("entry_conditions", Severity::Major, GapCategory::MissingExitConditions),
    ("exit_conditions", Severity::Major, GapCategory::MissingExitConditions),
    ("rollback", Severity::Major, GapCategory::MissingRollback),
];

/// Flags mandatory unit fields that are empty or hold a placeholder.
pub struct SchemaCompletenessCheck;

impl SchemaCompletenessCheck {
    /// Describe what is wrong with `field`, or `None` when it is filled in.
    fn problem(unit: &Unit, field: &str) -> Option<String> {
        let text = match field {
            "id" => &unit.id,
            "title" => &unit.title,
            "role" => &unit.role,
            "role_name" => &unit.role_name,
            "model" => &unit.model,
            "phase" => &unit.phase,
            "rollback" => &unit.rollback,
            "steps" => {
                return Self::list_problem(unit.steps.iter().map(|s| s.instruction.as_str()))
            }
            "deliverables" => {
                return Self::list_problem(unit.deliverables.iter().map(|d| d.path.as_str()))
            }
            "entry_conditions" => {
                return Self::list_problem(unit.entry_conditions.iter().map(String::as_str))
            }
            "exit_conditions" => {
                return Self::list_problem(unit.exit_conditions.iter().map(String::as_str))
            }
            _ => return None,
        };

        if text.trim().is_empty() {
            Some("is empty".to_string())
        } else if is_placeholder(text) {
            Some(format!("holds placeholder '{}'", text.trim()))
        } else {
            None
        }
    }

    /// A list field counts as unfilled when it is empty or every entry is a
    /// placeholder.
    fn list_problem<'a>(entries: impl Iterator<Item = &'a str>) -> Option<String> {
        let entries: Vec<&str> = entries.map(str::trim).collect();
        if entries.is_empty() {
            Some("is empty".to_string())
        } else if entries.iter().all(|e| is_placeholder(e)) {
            Some(format!("holds only placeholders '{}'", entries.join("', '")))
        } else {
            None
        }
    }
}

impl Checker for SchemaCompletenessCheck {
    fn id(&self) -> CheckerId {
        CheckerId::new("schema-completeness")
    }

    fn name(&self) -> &str {
        "Schema Completeness"
    }

    fn description(&self) -> &str {
        "Ensures every unit fills in its mandatory fields"
    }

    fn category(&self) -> GapCategory {
        GapCategory::UnderspecifiedSteps
    }

    fn default_severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
        let mut gaps = Vec::new();

        for (phase, unit) in roadmap.units() {
            let location = unit_location(phase, unit);
            for (field, severity, category) in MANDATORY_FIELDS {
                if let Some(problem) = Self::problem(unit, field) {
                    gaps.push(
                        Gap::new(
                            ids.next_id(),
                            *category,
                            *severity,
                            location.clone(),
                            format!("Unit {} field '{}' {}", location, field, problem),
                        )
                        .with_suggestion(format!("Fill in '{}' with concrete content", field)),
                    );
                }
            }
        }

        gaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrutiny::testing::{clean_unit, roadmap};

    #[test]
    fn clean_unit_has_no_gaps() {
        let gaps =
            SchemaCompletenessCheck.check(&roadmap(vec![clean_unit("U-1")]), &mut GapIds::new());
        assert!(gaps.is_empty());
    }

    #[test]
    fn empty_title_is_critical() {
        let mut unit = clean_unit("U-1");
        unit.title = String::new();

        let gaps = SchemaCompletenessCheck.check(&roadmap(vec![unit]), &mut GapIds::new());

        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].severity, Severity::Critical);
        assert!(gaps[0].description.contains("'title'"));
        assert_eq!(gaps[0].location, "U-1");
    }

    #[test]
    fn placeholder_rollback_is_major() {
        let mut unit = clean_unit("U-1");
        unit.rollback = "TBD".to_string();

        let gaps = SchemaCompletenessCheck.check(&roadmap(vec![unit]), &mut GapIds::new());

        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].severity, Severity::Major);
        assert_eq!(gaps[0].category, GapCategory::MissingRollback);
        assert!(gaps[0].description.contains("placeholder 'TBD'"));
    }

    #[test]
    fn bracketed_model_and_empty_lists() {
        let mut unit = clean_unit("U-1");
        unit.model = "[pick a model]".to_string();
        unit.steps.clear();
        unit.exit_conditions.clear();

        let gaps = SchemaCompletenessCheck.check(&roadmap(vec![unit]), &mut GapIds::new());

        assert_eq!(gaps.len(), 3);
        assert!(gaps.iter().all(|g| g.severity == Severity::Major));
    }

    #[test]
    fn missing_id_uses_positional_location() {
        let mut unit = clean_unit("");
        unit.role = "TODO".to_string();

        let gaps = SchemaCompletenessCheck.check(&roadmap(vec![unit]), &mut GapIds::new());

        assert_eq!(gaps.len(), 2);
        assert!(gaps.iter().all(|g| g.severity == Severity::Critical));
        assert!(gaps.iter().all(|g| g.location == "P1#1"));
    }

    #[test]
    fn ids_come_from_the_counter() {
        let mut unit = clean_unit("U-1");
        unit.title = String::new();
        unit.rollback = String::new();
        let mut ids = GapIds::new();
        ids.next_id();

        let gaps = SchemaCompletenessCheck.check(&roadmap(vec![unit]), &mut ids);

        assert_eq!(gaps[0].id, "GAP-002");
        assert_eq!(gaps[1].id, "GAP-003");
    }

    #[test]
    fn placeholder_only_lists_are_flagged() {
        let mut unit = clean_unit("U-1");
        unit.entry_conditions = vec!["TBD".to_string()];
        unit.exit_conditions = vec!["[fill in]".to_string(), "  ".to_string()];
        unit.deliverables[0].path = "TODO".to_string();

        let gaps = SchemaCompletenessCheck.check(&roadmap(vec![unit]), &mut GapIds::new());

        assert_eq!(gaps.len(), 3);
        assert!(gaps.iter().all(|g| g.severity == Severity::Major));
        let entry = gaps
            .iter()
            .find(|g| g.description.contains("'entry_conditions'"))
            .unwrap();
        assert_eq!(entry.category, GapCategory::MissingExitConditions);
        assert!(entry.description.contains("placeholders 'TBD'"));
        assert!(gaps
            .iter()
            .any(|g| g.category == GapCategory::OrphanedDeliverables));
    }

    #[test]
    fn one_real_entry_fills_a_list() {
        let mut unit = clean_unit("U-1");
        unit.exit_conditions.push("TBD".to_string());
        unit.steps[0].instruction = "TODO".to_string();
        unit.steps.push(unit.steps[0].clone());
        unit.steps[1].instruction = "Run cargo build".to_string();

        let gaps = SchemaCompletenessCheck.check(&roadmap(vec![unit]), &mut GapIds::new());

        assert!(gaps.is_empty());
    }
}
