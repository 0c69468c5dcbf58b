//! Skill validity.

use std::collections::BTreeSet;

use crate::roadmap::{unit_location, Roadmap};
use crate::scrutiny::patterns::KNOWN_SKILLS;
use crate::scrutiny::{Checker, CheckerId, Gap, GapCategory, GapIds, Severity};

/// Flags skill identifiers missing from the known-skill roster.
pub struct SkillValidityCheck {
    known: BTreeSet<String>,
}

impl SkillValidityCheck {
    pub fn new() -> Self {
        Self {
            known: KNOWN_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add skills to the roster.
    pub fn with_extras(mut self, skills: &[String]) -> Self {
        self.known.extend(skills.iter().cloned());
        self
    }
}

impl Default for SkillValidityCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for SkillValidityCheck {
    fn id(&self) -> CheckerId {
        CheckerId::new("skill-validity")
    }

    fn name(&self) -> &str {
        "Skill Validity"
    }

    fn description(&self) -> &str {
        "Ensures every skill id belongs to the known-skill roster"
    }

    fn category(&self) -> GapCategory {
        GapCategory::MissingSkills
    }

    fn default_severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
        let mut gaps = Vec::new();

        for (phase, unit) in roadmap.units() {
            for skill in unit.skills.iter().filter(|s| !self.known.contains(s.trim())) {
                let location = unit_location(phase, unit);
                gaps.push(
                    Gap::new(
                        ids.next_id(),
                        self.category(),
                        self.default_severity(),
                        location.clone(),
                        format!("Unit {} requires unknown skill '{}'", location, skill),
                    )
                    .with_suggestion(
                        "Use a skill from the known-skill roster or register the skill",
                    ),
                );
            }
        }

        gaps
    }
}
