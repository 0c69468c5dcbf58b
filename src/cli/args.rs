//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Scrutineer - Automated quality assurance for phased project roadmaps.
#[derive(Debug, Parser)]
#[command(name = "scrutineer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .scrutineer/config.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full multi-pass scrutiny loop over a roadmap
    Scrutinize(ScrutinizeArgs),

    /// Run one pass of selected checkers, without auto-fix
    Check(CheckArgs),

    /// List the registered checkers
    Checkers(CheckersArgs),

    /// Print the JSON Schema of the roadmap format
    Schema(SchemaArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scrutinize` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ScrutinizeArgs {
    /// Roadmap document (JSON or YAML)
    pub roadmap: PathBuf,

    /// Output format (human, json, sarif)
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Write the auto-fixed roadmap to this path
    #[arg(long, value_name = "PATH")]
    pub write_fixed: Option<PathBuf>,

    /// Write the scrutiny log as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Roadmap document (JSON or YAML)
    pub roadmap: PathBuf,

    /// Run only these checkers (repeatable or comma-separated)
    #[arg(long = "checker", value_name = "ID", value_delimiter = ',')]
    pub checkers: Vec<String>,

    /// Output format (human, json, sarif)
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Fail on any gap, not only CRITICAL and MAJOR ones
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `checkers` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `schema` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SchemaArgs {
    /// Print the configuration file schema instead
    #[arg(long)]
    pub settings: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
