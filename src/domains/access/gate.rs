//! Token gate.

use tracing::warn;

use super::error::AccessError;
use crate::core::config::AuthConfig;

/// Compares caller tokens against the configured secret.
///
/// This is an exact string comparison, nothing more.
#[derive(Clone)]
pub struct AccessGate {
    token: String,
    identity: Option<String>,
}

impl AccessGate {
    pub fn new(token: impl Into<String>, identity: Option<String>) -> Self {
        Self {
            token: token.into(),
            identity: identity.filter(|id| !id.is_empty()),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.token.clone(), config.my_number.clone())
    }

    /// Check `token` and return the configured identity.
    pub fn validate(&self, token: &str) -> Result<String, AccessError> {
        if token != self.token {
            warn!("Rejected validate call with an invalid token");
            return Err(AccessError::InvalidToken);
        }

        self.identity.clone().ok_or_else(|| {
            warn!("Token accepted but MY_NUMBER is not configured");
            AccessError::MissingIdentity
        })
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("token", &"[REDACTED]")
            .field("identity", &self.identity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_without_identity_is_config_error() {
        let gate = AccessGate::new("dev-token", None);
        assert_eq!(gate.validate("dev-token"), Err(AccessError::MissingIdentity));
    }

    #[test]
    fn test_validate_returns_identity() {
        let gate = AccessGate::new("dev-token", Some("+10000000000".to_string()));
        assert_eq!(gate.validate("dev-token").as_deref(), Ok("+10000000000"));
    }

    #[test]
    fn test_validate_rejects_wrong_token() {
        let gate = AccessGate::new("dev-token", Some("+10000000000".to_string()));
        assert_eq!(gate.validate("nope"), Err(AccessError::InvalidToken));
        assert_eq!(gate.validate("dev-token "), Err(AccessError::InvalidToken));
        assert_eq!(gate.validate(""), Err(AccessError::InvalidToken));
    }

    #[test]
    fn test_token_is_checked_before_identity() {
        let gate = AccessGate::new("dev-token", None);
        assert_eq!(gate.validate("wrong"), Err(AccessError::InvalidToken));
    }

    #[test]
    fn test_empty_identity_counts_as_missing() {
        let gate = AccessGate::new("t", Some(String::new()));
        assert_eq!(gate.validate("t"), Err(AccessError::MissingIdentity));
    }

    #[test]
    fn test_debug_redacts_token() {
        let gate = AccessGate::new("super-secret", None);
        let debug = format!("{:?}", gate);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
