//! Report formatters.
//!
//! This module renders a [`ScrutinyLog`] in different formats
//! (human-readable, JSON, SARIF).

pub mod human;
pub mod json;
pub mod sarif;

use std::io::Write;
use std::str::FromStr;

use super::ScrutinyLog;

/// Output format for scrutiny reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Sarif,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "sarif" => Ok(Self::Sarif),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Trait for formatting a scrutiny report.
pub trait ReportFormatter {
    /// Format the log to the given writer.
    fn format<W: Write>(&self, log: &ScrutinyLog, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::config::ScrutinyConfig;
    use crate::scrutiny::testing::{clean_unit, roadmap};
    use crate::scrutiny::{scrutinize, ScrutinyLog};

    /// A log with one CRITICAL and one MINOR unresolved gap.
    pub fn failing_log() -> ScrutinyLog {
        let mut unit = clean_unit("U-1");
        unit.dependencies = vec!["X-999".to_string()];
        unit.rollback = "Revert".to_string();
        scrutinize(&roadmap(vec![unit]), &ScrutinyConfig::default())
    }

    pub fn passing_log() -> ScrutinyLog {
        scrutinize(&roadmap(vec![clean_unit("U-1")]), &ScrutinyConfig::default())
    }
}
