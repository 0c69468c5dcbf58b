//! Roadmap data model.
//!
//! A roadmap is an ordered list of phases, each holding units of work. This
//! module provides:
//! - Schema definitions in [`schema`]
//! - File loading and writing in [`loader`]
//! - JSON Schema generation via [`roadmap_schema`]
//!
//! # Example
//!
//! ```
//! use scrutineer::roadmap::Roadmap;
//!
//! let roadmap: Roadmap = serde_json::from_str(
//!     r#"{"id": "RM-1", "phases": [{"id": "P1", "units": [{"id": "U-1"}]}]}"#,
//! ).unwrap();
//! assert_eq!(roadmap.unit_count(), 1);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_roadmap, load_roadmap_file, parse_roadmap, write_roadmap, RoadmapFormat};
pub use schema::{
    unit_location, Deliverable, Gate, IndexFlag, Phase, Roadmap, Step, ToolRef, Unit,
};

/// Generate the JSON Schema describing the roadmap document format.
pub fn roadmap_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(Roadmap);
    serde_json::to_value(schema).unwrap_or_default()
}
