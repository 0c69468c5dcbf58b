//! Automatic repair of mechanically correctable gaps.
//!
//! Only [`GapCategory::MissingIndexing`] gaps are repaired: the flag named in
//! the gap description is set on the unit named by its location. Everything
//! else needs a human.

use super::{Gap, GapCategory};
use crate::roadmap::{IndexFlag, Roadmap};

/// Result of an auto-fix run.
#[derive(Debug, Clone)]
pub struct FixResult {
    /// A patched copy of the input roadmap.
    pub fixed_roadmap: Roadmap,
    /// The gaps that were repaired, marked resolved.
    pub applied_gaps: Vec<Gap>,
}

impl FixResult {
    /// Number of fixes applied.
    pub fn applied(&self) -> usize {
        self.applied_gaps.len()
    }
}

/// Engine for applying automatic fixes.
pub struct FixEngine;

impl FixEngine {
    /// Create a new fix engine.
    pub fn new() -> Self {
        Self
    }

    /// Repair what can be repaired on a copy of `roadmap`.
    ///
    /// The input roadmap and gaps are left untouched; repaired gaps are
    /// returned resolved in `pass`.
    pub fn auto_fix(&self, roadmap: &Roadmap, gaps: &[Gap], pass: u32) -> FixResult {
        let mut fixed_roadmap = roadmap.clone();
        let mut applied_gaps = Vec::new();

        for gap in gaps {
            if gap.resolved || !gap.category.is_auto_fixable() {
                continue;
            }
            if let Some(resolved) = Self::apply(&mut fixed_roadmap, gap, pass) {
                applied_gaps.push(resolved);
            }
        }

        FixResult {
            fixed_roadmap,
            applied_gaps,
        }
    }

    fn apply(roadmap: &mut Roadmap, gap: &Gap, pass: u32) -> Option<Gap> {
        match gap.category {
            GapCategory::MissingIndexing => {
                let Some(flag) = IndexFlag::named_in(&gap.description) else {
                    tracing::debug!("{}: no index flag named in description", gap.id);
                    return None;
                };
                let Some(unit) = roadmap.unit_mut(&gap.location) else {
                    tracing::debug!("{}: unit {} not found", gap.id, gap.location);
                    return None;
                };
                unit.set_flag(flag, true);
                tracing::debug!("{}: set {} on {}", gap.id, flag, gap.location);

                let mut resolved = gap.clone();
                resolved.resolve(pass);
                Some(resolved)
            }
            _ => None,
        }
    }
}

impl Default for FixEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Repair `gaps` on a copy of `roadmap` as pass 1.
pub fn auto_fix(roadmap: &Roadmap, gaps: &[Gap]) -> FixResult {
    FixEngine::new().auto_fix(roadmap, gaps, 1)
}
