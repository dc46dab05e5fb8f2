//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The usage log could not be opened or written.
    #[error("Storage error: {0}")]
    Storage(#[from] crate::domains::usage::StorageError),

    /// The external generator could not be set up.
    #[error("Generation error: {0}")]
    Generation(#[from] crate::domains::generation::GenerationError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::usage::StorageError;

    #[test]
    fn test_domain_errors_convert() {
        let err: Error = StorageError::LockPoisoned.into();
        assert!(matches!(err, Error::Storage(_)));
        assert_eq!(
            err.to_string(),
            "Storage error: usage log connection lock poisoned"
        );
        assert_eq!(
            Error::config("bad").to_string(),
            "Configuration error: bad"
        );
    }
}
