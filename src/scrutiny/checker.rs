//! Checker definitions.
//!
//! This module provides the core trait and identifier for analysis passes:
//!
//! - [`Checker`] - The trait every checker implements
//! - [`CheckerId`] - Unique identifier for a checker

use super::gap::{GapCategory, Severity};
use super::ids::GapIds;
use super::Gap;
use crate::roadmap::Roadmap;

/// Unique identifier for a checker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckerId(pub String);

impl CheckerId {
    /// Create a new checker ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for CheckerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An independent analysis pass over a roadmap.
///
/// Checkers are pure: they never modify the roadmap and never fail. A field
/// a checker cannot interpret produces no gap rather than an error.
pub trait Checker: Send + Sync {
    /// Unique identifier for this checker.
    fn id(&self) -> CheckerId;

    /// Human-readable name of the checker.
    fn name(&self) -> &str;

    /// Description of what this checker inspects.
    fn description(&self) -> &str;

    /// Category of the gaps this checker primarily emits.
    fn category(&self) -> GapCategory;

    /// Highest severity this checker emits.
    fn default_severity(&self) -> Severity;

    /// Inspect the roadmap and return any gaps, drawing ids from `ids`.
    fn check(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap>;

    /// Whether gaps from this checker can be repaired by the fix engine.
    fn supports_fix(&self) -> bool {
        false
    }
}
