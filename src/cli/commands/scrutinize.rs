//! Scrutinize command implementation.
//!
//! The `scrutineer scrutinize` command runs the full convergence loop over a
//! roadmap and exits non-zero when the roadmap does not pass.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::ScrutinizeArgs;
use crate::config::{load_config, PassMode};
use crate::error::Result;
use crate::roadmap::write_roadmap;
use crate::scrutiny::{OutputFormat, Scrutinizer};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{load_for_command, parse_format, render_log, show_report, LOAD_FAILURE_EXIT};

/// The scrutinize command implementation.
pub struct ScrutinizeCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    use_color: bool,
    args: ScrutinizeArgs,
}

impl ScrutinizeCommand {
    /// Create a new scrutinize command.
    pub fn new(project_root: &Path, args: ScrutinizeArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            use_color: false,
            args,
        }
    }

    /// Load config from an explicit file instead of discovery.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Enable colored human output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ScrutinizeArgs {
        &self.args
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

impl Command for ScrutinizeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let format = parse_format(&self.args.format)?;
        let config = load_config(&self.project_root, self.config_path.as_deref())?;

        let roadmap_path = self.resolve(&self.args.roadmap);
        let Some((roadmap, input_format)) = load_for_command(ui, &roadmap_path)? else {
            return Ok(CommandResult::failure(LOAD_FAILURE_EXIT));
        };

        if format == OutputFormat::Human {
            ui.show_header(&format!("Scrutinizing {}", roadmap.id));
        }

        let iterative = config.pass_mode == PassMode::Iterative;
        let report = Scrutinizer::new(config).run(&roadmap);

        let rendered = render_log(
            &report.log,
            format,
            self.use_color,
            ui.output_mode().shows_progress(),
        );
        show_report(ui, format, &rendered);

        if iterative && !report.log.converged() {
            ui.warning(&format!(
                "Stopped at the {} pass cap without converging",
                report.log.passes.len()
            ));
        }

        if let Some(path) = &self.args.write_fixed {
            let path = self.resolve(path);
            write_roadmap(&path, &report.roadmap, input_format)?;
            if format == OutputFormat::Human {
                ui.success(&format!("Wrote fixed roadmap to {}", path.display()));
            }
        }

        if let Some(path) = &self.args.log {
            let path = self.resolve(path);
            let json = serde_json::to_string_pretty(&report.log).map_err(anyhow::Error::from)?;
            fs::write(&path, json + "\n")?;
            if format == OutputFormat::Human {
                ui.success(&format!("Wrote scrutiny log to {}", path.display()));
            }
        }

        if report.log.passed {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
