//! Scrutineer - Automated quality assurance for phased project roadmaps.
//!
//! Scrutineer inspects a roadmap (phases of units of work, each with a role,
//! tools, steps, deliverables, dependencies, and rollback plan) with twelve
//! independent checkers, scores it, repairs what can be repaired
//! mechanically, and repeats until the findings stabilise.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, layering, and validation
//! - [`error`] - Error types and result aliases
//! - [`roadmap`] - Roadmap data model and file loading
//! - [`scrutiny`] - Checkers, scoring, auto-fix, and the convergence loop
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use scrutineer::config::ScrutinyConfig;
//! use scrutineer::roadmap::Roadmap;
//!
//! let roadmap: Roadmap = serde_json::from_str(
//!     r#"{"id": "RM-1", "phases": [{"id": "P1", "units": [{"id": "U-1"}]}]}"#,
//! ).unwrap();
//!
//! let log = scrutineer::scrutinize(&roadmap, &ScrutinyConfig::default());
//! assert_eq!(log.roadmap_id, "RM-1");
//! assert!(log.passes.len() >= 3);
//! ```
//!
//! For file-based loading, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod roadmap;
pub mod scrutiny;
pub mod ui;

pub use error::{Result, ScrutinyError};
pub use scrutiny::scrutinize;
