//! Model provider error types
//!
//! Providers report failures through a small closed set of kinds so that
//! callers can map them to outcomes by pattern matching.

use thiserror::Error;

/// Result type alias for model provider operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that a model provider can report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The provider rejected the supplied feature values
    #[error("{0}")]
    InvalidInput(String),

    /// The model artifact could not be read
    #[error("Failed to read model artifact '{path}': {message}")]
    Io { path: String, message: String },

    /// The model artifact is malformed or structurally invalid
    #[error("Invalid model artifact: {0}")]
    Artifact(String),

    /// Any other failure inside the provider
    #[error("Internal model error: {0}")]
    Internal(String),
}

impl ModelError {
    /// Whether the failure was caused by the caller's input.
    ///
    /// Only [`ModelError::InvalidInput`] qualifies; every other kind is a
    /// fault of the provider itself.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ModelError::InvalidInput(_))
    }
}

/// A feature sequence did not have the length the model was trained on
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Expected {expected} features, got {actual}")]
pub struct LengthMismatch {
    pub expected: usize,
    pub actual: usize,
}
