//! Error types for scrutineer operations.
//!
//! This module defines [`ScrutinyError`], the error type used by the loading,
//! configuration, and command-line layers, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - The scrutiny core (checkers, scoring, auto-fix, orchestration) is
//!   infallible and never returns this type
//! - Use `ScrutinyError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ScrutinyError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for scrutineer operations.
#[derive(Debug, Error)]
pub enum ScrutinyError {
    /// Roadmap file not found at the given location.
    #[error("Roadmap not found: {path}")]
    RoadmapNotFound { path: PathBuf },

    /// Failed to parse a roadmap document.
    #[error("Failed to parse roadmap at {path}: {message}")]
    RoadmapParse { path: PathBuf, message: String },

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration values are out of range or inconsistent.
    #[error("Invalid configuration: {message}")]
    ConfigValidation { message: String },

    /// A checker id that is not registered was requested.
    #[error("Unknown checker: {id}")]
    UnknownChecker { id: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for scrutineer operations.
pub type Result<T> = std::result::Result<T, ScrutinyError>;
