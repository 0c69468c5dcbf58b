//! Configuration schema definitions for scrutineer.
//!
//! These structs map to the `.scrutineer/config.yml` file format. Every
//! section defaults independently, so a config file only needs the keys it
//! changes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrutinyError};
use crate::scrutiny::{GapCategory, Severity};

/// How many passes a scrutiny run makes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PassMode {
    /// Repeat check, score, and auto-fix until convergence or the cap.
    #[default]
    Iterative,
    /// One pass with no auto-fix.
    Single,
}

/// Root scrutiny configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScrutinyConfig {
    pub pass_mode: PassMode,

    /// Convergence is not tested before this pass.
    pub min_passes: u32,

    /// Hard cap on the number of passes.
    pub max_passes: u32,

    pub convergence_rule: ConvergenceRule,

    pub escalation_rule: EscalationRule,

    /// A score at or above this ends the loop early and is required to pass.
    pub improvement_threshold: f64,

    /// Categories that are reported. Gaps in other categories are discarded.
    pub categories: Vec<GapCategory>,

    /// Additional standalone tool names accepted by the tool checker.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_tools: Vec<String>,

    /// Additional dispatcher prefixes accepted by the tool checker.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_tool_prefixes: Vec<String>,

    /// Additional skill ids accepted by the skill checker.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_skills: Vec<String>,
}

impl Default for ScrutinyConfig {
    fn default() -> Self {
        Self {
            pass_mode: PassMode::default(),
            min_passes: 3,
            max_passes: 7,
            convergence_rule: ConvergenceRule::default(),
            escalation_rule: EscalationRule::default(),
            improvement_threshold: 0.92,
            categories: GapCategory::ALL.to_vec(),
            extra_tools: Vec::new(),
            extra_tool_prefixes: Vec::new(),
            extra_skills: Vec::new(),
        }
    }
}

impl ScrutinyConfig {
    /// Whether gaps in `category` are reported.
    pub fn reports(&self, category: GapCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Check that the values describe a loop that can run and terminate.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Err(ScrutinyError::ConfigValidation { message });

        if self.min_passes < 1 {
            return invalid("min_passes must be at least 1".to_string());
        }
        if self.max_passes < self.min_passes {
            return invalid(format!(
                "max_passes ({}) must be at least min_passes ({})",
                self.max_passes, self.min_passes
            ));
        }
        if !(0.0..=1.0).contains(&self.improvement_threshold) {
            return invalid(format!(
                "improvement_threshold must be between 0 and 1, got {}",
                self.improvement_threshold
            ));
        }
        if self.convergence_rule.delta_below < 1 {
            return invalid("convergence_rule.delta_below must be at least 1".to_string());
        }
        if self.escalation_rule.marker.trim().is_empty() {
            return invalid("escalation_rule.marker must not be empty".to_string());
        }

        Ok(())
    }
}

/// When consecutive passes count as stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ConvergenceRule {
    /// Converge when the unresolved count moves by less than this.
    pub delta_below: usize,
}

impl Default for ConvergenceRule {
    fn default() -> Self {
        Self { delta_below: 2 }
    }
}

/// When unresolved gaps are flagged for human review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EscalationRule {
    /// First pass on which escalation applies.
    pub from_pass: u32,

    /// Minimum severity of the gaps that escalate.
    pub severity: Severity,

    /// Prefix placed on the suggestion of an escalated gap.
    pub marker: String,
}

impl Default for EscalationRule {
    fn default() -> Self {
        Self {
            from_pass: 4,
            severity: Severity::Critical,
            marker: "[ESCALATED]".to_string(),
        }
    }
}
