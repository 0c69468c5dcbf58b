//! JSON output formatter.
//!
//! Emits the full log plus a severity summary of the unresolved gaps, for
//! pipelines that decide what to do with a roadmap.

use serde::Serialize;
use std::io::Write;

use super::ReportFormatter;
use crate::scrutiny::{Gap, ScrutinyLog, ScrutinyPass, SeverityCounts};

/// Formats scrutiny output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    roadmap_id: &'a str,
    passes: &'a [ScrutinyPass],
    final_score: f64,
    passed: bool,
    unresolved_gaps: &'a [Gap],
    summary: SeverityCounts,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, log: &ScrutinyLog, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            roadmap_id: &log.roadmap_id,
            passes: &log.passes,
            final_score: log.final_score,
            passed: log.passed,
            unresolved_gaps: &log.unresolved_gaps,
            summary: log.severity_counts(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrutiny::output::fixtures::{failing_log, passing_log};

    fn render(log: &ScrutinyLog) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(log, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_log_fields() {
        let parsed = render(&failing_log());

        assert_eq!(parsed["roadmap_id"], "RM-TEST");
        assert_eq!(parsed["passed"], false);
        assert_eq!(parsed["passes"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["unresolved_gaps"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn summary_counts_unresolved_by_severity() {
        let parsed = render(&failing_log());

        assert_eq!(parsed["summary"]["critical"], 1);
        assert_eq!(parsed["summary"]["major"], 0);
        assert_eq!(parsed["summary"]["minor"], 1);
        assert_eq!(parsed["summary"]["info"], 0);
    }

    #[test]
    fn gaps_use_wire_names() {
        let parsed = render(&failing_log());
        let gap = &parsed["unresolved_gaps"][0];

        assert_eq!(gap["id"], "GAP-001");
        assert_eq!(gap["category"], "missing_deps");
        assert_eq!(gap["severity"], "CRITICAL");
        assert_eq!(gap["resolved"], false);
    }

    #[test]
    fn passing_log_is_valid_json() {
        let parsed = render(&passing_log());
        assert_eq!(parsed["passed"], true);
        assert_eq!(parsed["final_score"], 1.0);
        assert!(parsed["passes"][2]["converged"].as_bool().unwrap());
    }
}
