//! Preference storage error types.
//!
//! Storage backends report failures as values. The store logs and discards
//! them, attaching `user_message` as the log detail; they never reach
//! callers of the store's public API.

use std::path::PathBuf;
use thiserror::Error;

/// Storage operation error.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// File I/O error.
    #[error("Failed to {operation} preference file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Preference file exists but is not valid TOML.
    #[error("Invalid preference file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Preference values could not be encoded.
    #[error("Failed to serialize preferences")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },

    /// Temp file could not be moved over the target.
    #[error("Failed to complete preference write")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backend refused the operation (disabled, quota, sandbox).
    #[error("Preference storage unavailable: {0}")]
    Unavailable(String),
}

impl PreferenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!(
                "Could not {} the preference file at {}",
                operation,
                path.display()
            ),
            Self::Parse { path, .. } => format!(
                "The preference file at {} is damaged and was ignored",
                path.display()
            ),
            Self::Serialize { .. } => "Preferences could not be encoded.".to_string(),
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save preferences to {}. Please check disk space and permissions.",
                target_path.display()
            ),
            Self::Unavailable(reason) => {
                format!("Preferences are not being saved: {reason}")
            }
        }
    }
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, PreferenceError>;
