//! Human-readable output formatter.
//!
//! Formats scrutiny reports for terminal display with optional color support.

use std::io::Write;

use super::ReportFormatter;
use crate::scrutiny::ScrutinyLog;
use crate::ui::ScrutinyTheme;

/// Formats scrutiny output for human consumption.
pub struct HumanFormatter {
    theme: ScrutinyTheme,
    /// Whether to print one line per pass.
    pub show_passes: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            theme: if use_color {
                ScrutinyTheme::forced()
            } else {
                ScrutinyTheme::plain()
            },
            show_passes: true,
        }
    }

    /// Choose whether the per-pass table is printed.
    pub fn with_passes(mut self, show_passes: bool) -> Self {
        self.show_passes = show_passes;
        self
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, log: &ScrutinyLog, writer: &mut W) -> std::io::Result<()> {
        for gap in &log.unresolved_gaps {
            // critical[missing_deps] U-1: description
            let label = gap.severity.as_str().to_lowercase();
            writeln!(
                writer,
                "{}[{}] {}: {}",
                self.theme.severity(gap.severity).apply_to(label),
                gap.category,
                self.theme.highlight.apply_to(&gap.location),
                gap.description
            )?;

            if let Some(ref suggestion) = gap.suggestion {
                writeln!(writer, "  = help: {}", suggestion)?;
            }

            writeln!(writer)?;
        }

        if self.show_passes {
            for pass in &log.passes {
                let mut line = format!(
                    "pass {}: {} gaps, {} unresolved, score {:.3}",
                    pass.pass,
                    pass.gaps.len(),
                    pass.unresolved,
                    pass.score
                );
                if pass.fixes_applied > 0 {
                    line.push_str(&format!(", {} fixed", pass.fixes_applied));
                }
                if pass.converged {
                    line.push_str(" [converged]");
                }
                writeln!(writer, "{}", self.theme.dim.apply_to(line))?;
            }
            writeln!(writer)?;
        }

        let counts = log.severity_counts();
        if counts.total() > 0 {
            writeln!(
                writer,
                "Found {} critical, {} major, {} minor, {} info",
                counts.critical, counts.major, counts.minor, counts.info
            )?;
        }

        let verdict = if log.passed {
            self.theme.success.apply_to("PASSED")
        } else {
            self.theme.error.apply_to("FAILED")
        };
        writeln!(
            writer,
            "{} {} with score {:.3} after {} pass(es)",
            verdict,
            log.roadmap_id,
            log.final_score,
            log.passes.len()
        )?;

        Ok(())
    }
}
