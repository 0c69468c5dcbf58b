//! Schema command implementation.
//!
//! The `scrutineer schema` command prints the JSON Schema of the roadmap
//! document format, or of the configuration file with `--settings`.

use crate::cli::args::SchemaArgs;
use crate::config::config_schema;
use crate::error::Result;
use crate::roadmap::roadmap_schema;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand {
    args: SchemaArgs,
}

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new(args: SchemaArgs) -> Self {
        Self { args }
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = if self.args.settings {
            config_schema()
        } else {
            roadmap_schema()
        };

        let json = serde_json::to_string_pretty(&schema).map_err(anyhow::Error::from)?;
        ui.message(&json);

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn run(settings: bool) -> serde_json::Value {
        let mut ui = MockUI::new();
        SchemaCommand::new(SchemaArgs { settings })
            .execute(&mut ui)
            .unwrap();
        serde_json::from_str(&ui.messages()[0]).unwrap()
    }

    #[test]
    fn prints_roadmap_schema() {
        let schema = run(false);
        assert_eq!(schema["title"], "Roadmap");
    }

    #[test]
    fn prints_config_schema() {
        let schema = run(true);
        assert_eq!(schema["title"], "ScrutinyConfig");
        assert!(schema["properties"]["max_passes"].is_object());
    }
}
