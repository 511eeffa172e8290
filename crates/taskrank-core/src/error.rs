//! Core error types for taskrank-core.
//!
//! The scoring engine itself never fails. These errors belong to the
//! collaborators around it: input validation, JSON import, and the
//! session/config store.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for taskrank-core.
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
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Data directory could not be resolved or created
    #[error("Failed to prepare data directory {path}: {message}")]
    DataDir { path: PathBuf, message: String },

    /// Config file exists but could not be read
    #[error("Failed to read configuration from {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors raised before a task ever reaches the scorer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One of the four required fields is absent
    #[error("Task {position} is missing required fields (title, due_date, estimated_hours, importance)")]
    MissingFields { position: usize },

    /// Invalid value
    #[error("Task {position}: invalid value for '{field}': {message}")]
    InvalidValue {
        position: usize,
        field: &'static str,
        message: String,
    },

    /// Payload is neither a task array nor an object with a `tasks` array
    #[error("Expected a list of tasks or object with tasks array")]
    UnexpectedShape,

    /// Dependency references form at least one loop
    #[error("Circular dependencies detected: {cycles:?}")]
    CircularDependencies { cycles: Vec<Vec<u32>> },
}

impl ValidationError {
    pub(crate) fn invalid(position: usize, field: &'static str, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            position,
            field,
            message: message.into(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
