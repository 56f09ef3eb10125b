//! Error types and handling
//!
//! This module contains error types for loading and running registry sessions.
//! Registry call failures are not session errors; they are ordinary responses.

use crate::types::{ConfigError, ConfigValidationError};
use thiserror::Error;

/// Errors that can occur while preparing or running a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// No script was configured
    #[error("No script configured (use --script or set \"script\" in the config file)")]
    MissingScript,

    /// Script file not found
    #[error("Script file not found: {0}")]
    ScriptNotFound(String),

    /// Script file extension is not supported
    #[error("Unsupported script format: {0} (supported: .json, .jsonl)")]
    UnsupportedScriptFormat(String),

    /// A line of a JSON Lines script could not be parsed
    #[error("Failed to parse script line {line}: {source}")]
    ScriptParse {
        /// One-based line number
        line: usize,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigError),

    /// Configuration failed validation
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ConfigValidationError),
}

impl SessionError {
    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SessionError::MissingScript => "Script",
            SessionError::ScriptNotFound(_) => "Script",
            SessionError::UnsupportedScriptFormat(_) => "Script",
            SessionError::ScriptParse { .. } => "Script",
            SessionError::IoError(_) => "IO",
            SessionError::SerializationError(_) => "Serialization",
            SessionError::ConfigurationError(_) => "Configuration",
            SessionError::ValidationError(_) => "Configuration",
        }
    }
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
