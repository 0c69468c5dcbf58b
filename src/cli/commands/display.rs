//! Shared display helpers for scrutiny reports.
//!
//! These helpers are used by `scrutinize` and `check` to load roadmaps and
//! render a [`ScrutinyLog`] consistently.

use std::path::Path;

use crate::error::{Result, ScrutinyError};
use crate::roadmap::{load_roadmap_file, Roadmap, RoadmapFormat};
use crate::scrutiny::{
    HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter, SarifFormatter, ScrutinyLog,
};
use crate::ui::UserInterface;

/// Exit code used when the roadmap cannot be read.
pub const LOAD_FAILURE_EXIT: i32 = 2;

/// Parse the `--format` argument.
pub fn parse_format(format: &str) -> Result<OutputFormat> {
    format
        .parse()
        .map_err(|message: String| ScrutinyError::Other(anyhow::anyhow!(message)))
}

/// Load a roadmap, reporting load failures through the UI.
///
/// Returns `Ok(None)` when the file is missing or malformed so the caller can
/// exit with [`LOAD_FAILURE_EXIT`]; other errors propagate.
pub fn load_for_command(
    ui: &mut dyn UserInterface,
    path: &Path,
) -> Result<Option<(Roadmap, RoadmapFormat)>> {
    match load_roadmap_file(path) {
        Ok(loaded) => Ok(Some(loaded)),
        Err(e @ ScrutinyError::RoadmapNotFound { .. })
        | Err(e @ ScrutinyError::RoadmapParse { .. }) => {
            ui.error(&e.to_string());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Render a log in the requested format.
pub fn render_log(
    log: &ScrutinyLog,
    format: OutputFormat,
    use_color: bool,
    show_passes: bool,
) -> String {
    let mut output = Vec::new();

    match format {
        OutputFormat::Json => {
            JsonFormatter::new().format(log, &mut output).ok();
        }
        OutputFormat::Sarif => {
            SarifFormatter::new("scrutineer", env!("CARGO_PKG_VERSION"))
                .format(log, &mut output)
                .ok();
        }
        OutputFormat::Human => {
            HumanFormatter::new(use_color)
                .with_passes(show_passes)
                .format(log, &mut output)
                .ok();
        }
    }

    String::from_utf8(output).unwrap_or_default()
}

/// Print a rendered report.
///
/// Machine formats go out as a single message so they stay parseable.
pub fn show_report(ui: &mut dyn UserInterface, format: OutputFormat, rendered: &str) {
    match format {
        OutputFormat::Human => {
            for line in rendered.lines() {
                ui.message(line);
            }
        }
        OutputFormat::Json | OutputFormat::Sarif => ui.message(rendered.trim_end()),
    }
}
