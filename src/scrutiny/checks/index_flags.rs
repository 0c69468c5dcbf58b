//! Index flags.
//!
//! A unit whose deliverables are skills, scripts, hooks, or commands must
//! set the matching `creates_*` flag so the artifact gets indexed. These gaps
//! are repaired by the fix engine.

use crate::roadmap::{unit_location, IndexFlag, Roadmap, Unit};
use crate::scrutiny::{Checker, CheckerId, Gap, GapCategory, GapIds, Severity};

/// Flags indexing booleans contradicted by deliverable content.
pub struct IndexFlagsCheck;

impl IndexFlagsCheck {
    /// Flags implied by a unit's deliverable paths and declared types.
    pub fn implied_flags(unit: &Unit) -> Vec<IndexFlag> {
        IndexFlag::ALL
            .into_iter()
            .filter(|flag| {
                unit.deliverables.iter().any(|d| {
                    d.path.to_lowercase().contains(flag.keyword())
                        || d.kind.to_lowercase().contains(flag.keyword())
                })
            })
            .collect()
    }
}

impl Checker for IndexFlagsCheck {
    fn id(&self) -> CheckerId {
        CheckerId::new("index-flags")
    }

    fn name(&self) -> &str {
        "Index Flags"
    }

    fn description(&self) -> &str {
        "Ensures creates_* flags match the deliverables a unit produces"
    }

    fn category(&self) -> GapCategory {
        GapCategory::MissingIndexing
    }

    fn default_severity(&self) -> Severity {
        Severity::Minor
    }

    fn check(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
        let mut gaps = Vec::new();

        for (phase, unit) in roadmap.units() {
            for flag in Self::implied_flags(unit) {
                if unit.flag(flag) {
                    continue;
                }
                let location = unit_location(phase, unit);
                gaps.push(
                    Gap::new(
                        ids.next_id(),
                        self.category(),
                        self.default_severity(),
                        location.clone(),
                        format!(
                            "Unit {} produces a {} but {} is false",
                            location,
                            flag.keyword(),
                            flag.field_name()
                        ),
                    )
                    .with_suggestion(format!("Set {} to true", flag.field_name())),
                );
            }
        }

        gaps
    }

    fn supports_fix(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::Deliverable;
    use crate::scrutiny::testing::{clean_unit, roadmap};

    fn deliverable(path: &str, kind: &str) -> Deliverable {
        Deliverable {
            path: path.to_string(),
            kind: kind.to_string(),
            description: "artifact".to_string(),
        }
    }

    #[test]
    fn hook_path_without_flag_is_minor() {
        let mut unit = clean_unit("U-1");
        unit.deliverables = vec![deliverable("hooks/on-save.ts", "source")];

        let gaps = IndexFlagsCheck.check(&roadmap(vec![unit]), &mut GapIds::new());

        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].category, GapCategory::MissingIndexing);
        assert_eq!(gaps[0].severity, Severity::Minor);
        assert!(gaps[0].description.contains("creates_hook"));
        assert_eq!(IndexFlag::named_in(&gaps[0].description), Some(IndexFlag::Hook));
    }

    #[test]
    fn flag_set_suppresses_gap() {
        let mut unit = clean_unit("U-1");
        unit.deliverables = vec![deliverable("hooks/on-save.ts", "source")];
        unit.creates_hook = true;

        let gaps = IndexFlagsCheck.check(&roadmap(vec![unit]), &mut GapIds::new());

        assert!(gaps.is_empty());
    }

    #[test]
    fn declared_type_implies_flag() {
        let mut unit = clean_unit("U-1");
        unit.deliverables = vec![
            deliverable("bin/deploy", "script"),
            deliverable(".claude/commands/ship.md", "doc"),
        ];

        let flags = IndexFlagsCheck::implied_flags(&unit);

        assert_eq!(flags, vec![IndexFlag::Script, IndexFlag::Command]);
    }

    #[test]
    fn plain_source_implies_nothing() {
        assert!(IndexFlagsCheck::implied_flags(&clean_unit("U-1")).is_empty());
    }
}
