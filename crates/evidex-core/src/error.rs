//! Centralized error types for Evidex.

use thiserror::Error;

/// Main error type for Evidex operations.
///
/// The shell has no failing inputs of its own; template rendering is the
/// one operation that can go wrong.
#[derive(Error, Debug)]
pub enum EvidexError {
    #[error("Template error: {0}")]
    Template(String),
}

/// Result type for Evidex operations.
pub type EvidexResult<T> = Result<T, EvidexError>;

impl EvidexError {
    /// Create a template error.
    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }
}
