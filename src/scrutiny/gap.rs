//! Gap records.
//!
//! A [`Gap`] is one finding produced by a checker. Gaps carry a
//! [`GapCategory`] from a fixed roster of twelve and a [`Severity`] whose
//! weight feeds the quality score.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity of a gap. Ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Informational, never weighs on the score.
    Info,
    Minor,
    Major,
    /// Blocks a passing verdict while unresolved.
    Critical,
}

impl Severity {
    /// Weight contributed to the score penalty by an unresolved gap.
    pub fn weight(self) -> u32 {
        match self {
            Severity::Critical => 3,
            Severity::Major => 2,
            Severity::Minor => 1,
            Severity::Info => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Major => "MAJOR",
            Severity::Minor => "MINOR",
            Severity::Info => "INFO",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The twelve gap categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum GapCategory {
    MissingTools,
    MissingDeps,
    MissingExitConditions,
    MissingRollback,
    SequenceErrors,
    RoleMismatch,
    EffortMismatch,
    MissingIndexing,
    MissingSkills,
    OrphanedDeliverables,
    UnderspecifiedSteps,
    MissingTests,
}

impl GapCategory {
    /// The full roster, in canonical order.
    pub const ALL: [GapCategory; 12] = [
        GapCategory::MissingTools,
        GapCategory::MissingDeps,
        GapCategory::MissingExitConditions,
        GapCategory::MissingRollback,
        GapCategory::SequenceErrors,
        GapCategory::RoleMismatch,
        GapCategory::EffortMismatch,
        GapCategory::MissingIndexing,
        GapCategory::MissingSkills,
        GapCategory::OrphanedDeliverables,
        GapCategory::UnderspecifiedSteps,
        GapCategory::MissingTests,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GapCategory::MissingTools => "missing_tools",
            GapCategory::MissingDeps => "missing_deps",
            GapCategory::MissingExitConditions => "missing_exit_conditions",
            GapCategory::MissingRollback => "missing_rollback",
            GapCategory::SequenceErrors => "sequence_errors",
            GapCategory::RoleMismatch => "role_mismatch",
            GapCategory::EffortMismatch => "effort_mismatch",
            GapCategory::MissingIndexing => "missing_indexing",
            GapCategory::MissingSkills => "missing_skills",
            GapCategory::OrphanedDeliverables => "orphaned_deliverables",
            GapCategory::UnderspecifiedSteps => "underspecified_steps",
            GapCategory::MissingTests => "missing_tests",
        }
    }

    /// Whether gaps in this category can be repaired mechanically.
    pub fn is_auto_fixable(self) -> bool {
        matches!(self, GapCategory::MissingIndexing)
    }
}

impl std::fmt::Display for GapCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GapCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown gap category: {}", s))
    }
}

/// One finding from a checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    /// Identifier, unique within one pass.
    pub id: String,
    pub category: GapCategory,
    pub severity: Severity,
    /// A unit id, a phase id, or a comma-joined list of ids.
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_in_pass: Option<u32>,
}

impl Gap {
    /// Create a new unresolved gap.
    pub fn new(
        id: impl Into<String>,
        category: GapCategory,
        severity: Severity,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            severity,
            location: location.into(),
            description: description.into(),
            suggestion: None,
            resolved: false,
            resolved_in_pass: None,
        }
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Mark this gap resolved by the given pass.
    pub fn resolve(&mut self, pass: u32) {
        self.resolved = true;
        self.resolved_in_pass = Some(pass);
    }

    /// Unresolved and CRITICAL.
    pub fn is_blocking(&self) -> bool {
        !self.resolved && self.severity == Severity::Critical
    }
}

/// Count the unresolved gaps in a list.
pub fn unresolved_count(gaps: &[Gap]) -> usize {
    gaps.iter().filter(|g| !g.resolved).count()
}
