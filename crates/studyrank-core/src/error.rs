//! Core error types for studyrank-core.
//!
//! Scoring, overlap and ranking are total and never fail; these errors cover
//! the collaborators around them (configuration, the activity file, and the
//! input form).

use std::path::PathBuf;
use thiserror::Error;

use crate::activity::ActivityType;

/// Core error type for studyrank-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Activity file errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Data directory could not be resolved or created
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Activity file errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read activities from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write activities to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Activity file {path} is not valid: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reasons the input form rejects a submission.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name, date or time left empty
    #[error("Please fill in all required fields.")]
    MissingFields { missing: Vec<&'static str> },

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("Duration must be at least one minute")]
    InvalidDuration,

    #[error("Importance {score} is outside the {kind} range {label}")]
    ScoreOutOfRange {
        kind: ActivityType,
        score: i32,
        label: &'static str,
    },

    /// Candidate intersects an existing booking on the same date
    #[error("This activity overlaps with an existing schedule item! ({conflicting_name} at {conflicting_time})")]
    Overlap {
        conflicting_id: String,
        conflicting_name: String,
        conflicting_time: String,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
