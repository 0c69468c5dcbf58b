//! Tool validity.
//!
//! Tool references must go through a known dispatcher or name an allow-listed
//! standalone tool.

use crate::roadmap::{unit_location, Roadmap};
use crate::scrutiny::patterns::{STANDALONE_TOOLS, TOOL_PREFIXES};
use crate::scrutiny::{Checker, CheckerId, Gap, GapCategory, GapIds, Severity};

/// Flags tool references that no dispatcher recognizes.
pub struct ToolValidityCheck {
    prefixes: Vec<String>,
    standalone: Vec<String>,
}

impl ToolValidityCheck {
    /// Create a checker using the built-in prefix and allow-lists.
    pub fn new() -> Self {
        Self {
            prefixes: TOOL_PREFIXES.iter().map(|s| s.to_string()).collect(),
            standalone: STANDALONE_TOOLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Extend the built-in lists.
    pub fn with_extras(mut self, prefixes: &[String], tools: &[String]) -> Self {
        self.prefixes.extend(prefixes.iter().cloned());
        self.standalone
            .extend(tools.iter().map(|t| t.to_lowercase()));
        self
    }

    /// Whether a tool name is recognized.
    pub fn is_known(&self, tool: &str) -> bool {
        let tool = tool.trim();
        if tool.is_empty() {
            return false;
        }
        if self.prefixes.iter().any(|p| tool.starts_with(p.as_str())) {
            return true;
        }
        let lowered = tool.to_lowercase();
        self.standalone.iter().any(|t| *t == lowered)
    }
}

impl Default for ToolValidityCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for ToolValidityCheck {
    fn id(&self) -> CheckerId {
        CheckerId::new("tool-validity")
    }

    fn name(&self) -> &str {
        "Tool Validity"
    }

    fn description(&self) -> &str {
        "Ensures every tool reference resolves to a known dispatcher or tool"
    }

    fn category(&self) -> GapCategory {
        GapCategory::MissingTools
    }

    fn default_severity(&self) -> Severity {
        Severity::Major
    }

    fn check(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
        let mut gaps = Vec::new();

        for (phase, unit) in roadmap.units() {
            for tool_ref in &unit.tools {
                if self.is_known(&tool_ref.tool) {
                    continue;
                }
                let location = unit_location(phase, unit);
                gaps.push(
                    Gap::new(
                        ids.next_id(),
                        self.category(),
                        self.default_severity(),
                        location.clone(),
                        format!("Unit {} references unknown tool '{}'", location, tool_ref.tool),
                    )
                    .with_suggestion(
                        "Use a dispatcher-prefixed tool name (e.g. 'mcp__server__tool') \
                         or an allow-listed tool",
                    ),
                );
            }
        }

        gaps
    }
}
