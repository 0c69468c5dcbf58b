//! Roadmap scrutiny.
//!
//! This module provides:
//! - Gap records in [`gap`]
//! - The [`Checker`] trait and the twelve built-in checkers in [`checks`]
//! - Quality scoring in [`score`]
//! - Mechanical repairs in [`fix`]
//! - The multi-pass convergence loop in [`orchestrator`]
//! - Report formatters in [`output`]
//!
//! # Example
//!
//! ```
//! use scrutineer::config::ScrutinyConfig;
//! use scrutineer::roadmap::Roadmap;
//! use scrutineer::scrutiny::{scrutinize, GapCategory};
//!
//! let roadmap: Roadmap = serde_json::from_str(
//!     r#"{"id": "RM-1", "phases": [{"id": "P1", "units": [{"id": "U-1"}]}]}"#,
//! ).unwrap();
//!
//! let log = scrutinize(&roadmap, &ScrutinyConfig::default());
//! assert!(!log.passed);
//! assert!(log
//!     .unresolved_gaps
//!     .iter()
//!     .any(|gap| gap.category == GapCategory::MissingTests));
//! ```

pub mod checker;
pub mod checks;
pub mod fix;
pub mod gap;
pub mod ids;
pub mod orchestrator;
pub mod output;
pub mod patterns;
pub mod registry;
pub mod score;

#[cfg(test)]
pub(crate) mod testing;

pub use checker::{Checker, CheckerId};
pub use fix::{auto_fix, FixEngine, FixResult};
pub use gap::{unresolved_count, Gap, GapCategory, Severity};
pub use ids::GapIds;
pub use orchestrator::{
    scrutinize, ScrutinyLog, ScrutinyPass, ScrutinyReport, Scrutinizer, SeverityCounts,
};
pub use output::{
    HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter, SarifFormatter,
};
pub use registry::CheckerRegistry;
pub use score::{score_gaps, CHECKS_PER_UNIT};
