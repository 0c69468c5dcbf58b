//! Configuration file discovery and loading.
//!
//! Configuration is optional: a project without a `.scrutineer/` directory
//! runs with [`ScrutinyConfig::default`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::merge_layers;
use crate::config::schema::ScrutinyConfig;
use crate::error::{Result, ScrutinyError};

/// Name of the per-project configuration directory.
pub const CONFIG_DIR: &str = ".scrutineer";

/// Paths to configuration files in merge order (later overrides earlier).
///
/// 1. Project config (`.scrutineer/config.yml`)
/// 2. Local overrides (`.scrutineer/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .scrutineer/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .scrutineer/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Whether any config file was found.
    pub fn is_empty(&self) -> bool {
        self.project.is_none() && self.project_local.is_none()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Load a config file as a raw YAML value, for merging.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ScrutinyError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ScrutinyError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| ScrutinyError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Turn merged layers into a typed, validated config.
fn parse_layers(layers: &[serde_yaml::Value], source: &Path) -> Result<ScrutinyConfig> {
    let merged = merge_layers(layers);
    let config: ScrutinyConfig =
        serde_yaml::from_value(merged).map_err(|e| ScrutinyError::ConfigParse {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
    config.validate()?;
    Ok(config)
}

/// Load and merge the config files discovered under `project_root`.
///
/// Returns the defaults when no config file exists.
pub fn load_merged_config(project_root: &Path) -> Result<ScrutinyConfig> {
    let paths = ConfigPaths::discover(project_root);

    if paths.is_empty() {
        tracing::debug!("No config under {}, using defaults", project_root.display());
        return Ok(ScrutinyConfig::default());
    }

    let mut layers = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config layer {}", path.display());
        layers.push(load_config_value(path)?);
    }

    parse_layers(&layers, &project_root.join(CONFIG_DIR).join("config.yml"))
}

/// Load config with an optional explicit path.
///
/// An explicit path replaces discovery and must exist.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ScrutinyConfig> {
    match config_override {
        Some(path) => parse_layers(&[load_config_value(path)?], path),
        None => load_merged_config(project_root),
    }
}
