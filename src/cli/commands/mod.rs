//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`scrutineer scrutinize`, `scrutineer check`)
//! - Shared roadmap loading and report rendering in [`display`]
//! - Consistent global flag handling

pub mod check;
pub mod checkers;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod schema;
pub mod scrutinize;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
