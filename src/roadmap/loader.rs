//! Roadmap file loading and writing.
//!
//! Roadmaps arrive as JSON or YAML documents. The format is picked from the
//! file extension; files without a recognized extension are tried as JSON
//! first, then YAML.

use std::fs;
use std::path::Path;

use crate::error::{Result, ScrutinyError};
use crate::roadmap::schema::Roadmap;

/// On-disk encoding of a roadmap document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadmapFormat {
    Json,
    Yaml,
}

impl RoadmapFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Load a roadmap from a file.
pub fn load_roadmap(path: &Path) -> Result<Roadmap> {
    load_roadmap_file(path).map(|(roadmap, _)| roadmap)
}

/// Load a roadmap from a file along with the format it was parsed as.
pub fn load_roadmap_file(path: &Path) -> Result<(Roadmap, RoadmapFormat)> {
    if !path.exists() {
        return Err(ScrutinyError::RoadmapNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let (roadmap, format) = match RoadmapFormat::from_path(path) {
        Some(format) => (parse_roadmap(&content, format, path)?, format),
        None => parse_roadmap(&content, RoadmapFormat::Json, path)
            .map(|r| (r, RoadmapFormat::Json))
            .or_else(|_| {
                parse_roadmap(&content, RoadmapFormat::Yaml, path).map(|r| (r, RoadmapFormat::Yaml))
            })?,
    };

    tracing::debug!(
        "Loaded roadmap '{}' with {} unit(s) from {}",
        roadmap.id,
        roadmap.unit_count(),
        path.display()
    );

    Ok((roadmap, format))
}

/// Parse roadmap content in the given format.
///
/// `path` is only used for error reporting.
pub fn parse_roadmap(content: &str, format: RoadmapFormat, path: &Path) -> Result<Roadmap> {
    let parsed = match format {
        RoadmapFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        RoadmapFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| ScrutinyError::RoadmapParse {
        path: path.to_path_buf(),
        message,
    })
}

/// Write a roadmap to a file in the given format.
pub fn write_roadmap(path: &Path, roadmap: &Roadmap, format: RoadmapFormat) -> Result<()> {
    let content = match format {
        RoadmapFormat::Json => {
            serde_json::to_string_pretty(roadmap).map_err(anyhow::Error::from)? + "\n"
        }
        RoadmapFormat::Yaml => serde_yaml::to_string(roadmap).map_err(anyhow::Error::from)?,
    };
    fs::write(path, content)?;
    Ok(())
}
