//! Checkers command implementation.
//!
//! The `scrutineer checkers` command lists the registered checkers.

use serde::Serialize;

use crate::cli::args::CheckersArgs;
use crate::error::Result;
use crate::scrutiny::{CheckerRegistry, GapCategory, Severity};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The checkers command implementation.
pub struct CheckersCommand {
    args: CheckersArgs,
}

#[derive(Serialize)]
struct CheckerInfo<'a> {
    id: String,
    name: &'a str,
    description: &'a str,
    category: GapCategory,
    default_severity: Severity,
    auto_fixable: bool,
}

impl CheckersCommand {
    /// Create a new checkers command.
    pub fn new(args: CheckersArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckersCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = CheckerRegistry::with_builtins();

        let infos: Vec<CheckerInfo<'_>> = registry
            .iter()
            .map(|checker| CheckerInfo {
                id: checker.id().to_string(),
                name: checker.name(),
                description: checker.description(),
                category: checker.category(),
                default_severity: checker.default_severity(),
                auto_fixable: checker.supports_fix(),
            })
            .collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&infos).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Checkers");
        let width = infos.iter().map(|i| i.id.len()).max().unwrap_or(0);
        for info in &infos {
            let fix = if info.auto_fixable { " (auto-fix)" } else { "" };
            ui.message(&format!(
                "  {:<width$}  {:<8}  {}{}",
                info.id,
                info.default_severity.as_str(),
                info.category,
                fix,
                width = width
            ));
            if ui.output_mode().shows_details() {
                ui.message(&format!("  {:<width$}  {}", "", info.description, width = width));
            }
        }

        Ok(CommandResult::success())
    }
}
