//! Core error types for chorewheel-core.
//!
//! Expected infeasibility during allocation is not an error: it is reported
//! through [`crate::allocation::AllocationReport`]. The types here cover
//! storage faults, bad configuration and rejected roster edits.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for chorewheel-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Household document storage errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

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

/// Errors raised while reading or writing the household document.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read household from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse household at {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write household to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document was written by a newer version of the program.
    #[error("Unsupported household schema version {found} (supported: {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },

    #[error("Could not determine a data directory")]
    NoDataDir,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors for roster and day edits.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{kind} name must not be empty")]
    EmptyName { kind: &'static str },

    #[error("{kind} named '{name}' already exists")]
    DuplicateName { kind: &'static str, name: String },

    #[error("Unknown {kind}: {token}")]
    NotFound { kind: &'static str, token: String },

    #[error("Day {date} is confirmed and cannot be edited")]
    DayConfirmed { date: chrono::NaiveDate },

    #[error("No record exists for {date}")]
    NoRecord { date: chrono::NaiveDate },

    #[error("{person} already has '{chore}' on {date}")]
    AlreadyAssigned {
        person: String,
        chore: String,
        date: chrono::NaiveDate,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
