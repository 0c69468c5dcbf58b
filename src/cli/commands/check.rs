//! Check command implementation.
//!
//! The `scrutineer check` command runs a single pass of the selected checkers
//! without auto-fix, for targeted linting of a roadmap.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::{load_config, PassMode};
use crate::error::Result;
use crate::scrutiny::{CheckerId, CheckerRegistry, OutputFormat, Scrutinizer, Severity};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{load_for_command, parse_format, render_log, show_report, LOAD_FAILURE_EXIT};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    use_color: bool,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
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
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let format = parse_format(&self.args.format)?;
        let mut config = load_config(&self.project_root, self.config_path.as_deref())?;
        config.pass_mode = PassMode::Single;

        let mut registry = CheckerRegistry::from_config(&config);
        if !self.args.checkers.is_empty() {
            let ids: Vec<CheckerId> = self.args.checkers.iter().map(CheckerId::new).collect();
            registry.retain_only(&ids)?;
        }

        let roadmap_path = if self.args.roadmap.is_absolute() {
            self.args.roadmap.clone()
        } else {
            self.project_root.join(&self.args.roadmap)
        };
        let Some((roadmap, _)) = load_for_command(ui, &roadmap_path)? else {
            return Ok(CommandResult::failure(LOAD_FAILURE_EXIT));
        };

        let log = Scrutinizer::with_registry(config, registry).run(&roadmap).log;

        let gaps = &log.unresolved_gaps;
        let should_fail = if self.args.strict {
            !gaps.is_empty()
        } else {
            gaps.iter().any(|g| g.severity >= Severity::Major)
        };

        if gaps.is_empty() && format == OutputFormat::Human {
            ui.success(&format!("No gaps found in {}", log.roadmap_id));
            return Ok(CommandResult::success());
        }

        let rendered = render_log(&log, format, self.use_color, false);
        show_report(ui, format, &rendered);

        if should_fail {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
