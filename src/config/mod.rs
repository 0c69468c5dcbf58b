//! Configuration loading, layering, and validation for scrutineer.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use scrutineer::config::{load_merged_config, PassMode};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".scrutineer");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "pass_mode: single").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.pass_mode, PassMode::Single);
//! assert_eq!(config.max_passes, 7);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.scrutineer/config.yml`)
//! 2. Local overrides (`.scrutineer/config.local.yml`)
//!
//! `--config <path>` loads a single file instead.

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{load_config, load_config_value, load_merged_config, ConfigPaths, CONFIG_DIR};
pub use merger::{deep_merge, merge_layers};
pub use schema::{ConvergenceRule, EscalationRule, PassMode, ScrutinyConfig};

/// JSON Schema of the configuration file format.
pub fn config_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(ScrutinyConfig);
    serde_json::to_value(schema).unwrap_or_default()
}
