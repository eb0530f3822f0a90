//! Core error types for dopatrack-core.
//!
//! The curve generator itself is infallible; these errors cover the
//! fallible boundaries around it: registry files, activity lookups by id,
//! and scenario import/export.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dopatrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load a registry file
    #[error("Failed to load registry from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse a registry file
    #[error("Failed to parse registry: {0}")]
    ParseFailed(String),

    /// Invalid registry value
    #[error("Invalid registry value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Lookup by an id not present in the registry
    #[error("Unknown activity: {0}")]
    UnknownActivity(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
