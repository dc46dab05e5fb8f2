//! Access gate error types.

use thiserror::Error;

/// Errors returned by the access gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The supplied token does not match the configured secret.
    #[error("Invalid token")]
    InvalidToken,

    /// The token matched but no identity is configured to hand back.
    #[error("MY_NUMBER not set in environment")]
    MissingIdentity,
}
