//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and a `.env` file, if present) once at startup.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default secret expected by the `validate` tool.
pub const DEFAULT_AUTH_TOKEN: &str = "dev-token";

/// Default OpenAI-compatible endpoint.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Token gate configuration.
    pub auth: AuthConfig,

    /// External text generation configuration.
    pub llm: LlmConfig,

    /// Usage log configuration.
    pub storage: StorageConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the `validate` tool.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret the caller must present.
    pub token: String,

    /// Identity returned on a successful validation.
    pub my_number: Option<String>,
}

/// Configuration for the optional external poem generator.
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API key; its presence enables the external path.
    pub api_key: Option<String>,

    /// Base URL of the chat-completions API.
    pub base_url: String,

    /// Set to false to force template rendering even with a key.
    pub enabled: bool,

    /// Upper bound on one external call, in seconds.
    pub timeout_secs: u64,
}

/// Configuration for the usage log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &"[REDACTED]")
            .field("my_number", &self.my_number)
            .finish()
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("enabled", &self.enabled)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: DEFAULT_AUTH_TOKEN.to_string(),
            my_number: None,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            enabled: true,
            timeout_secs: 10,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("usage.db"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "PoemGen".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            auth: AuthConfig::default(),
            llm: LlmConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// `AUTH_TOKEN`, `MY_NUMBER`, `OPENAI_API_KEY` and `PORT` use their
    /// conventional names; everything else is prefixed with `MCP_` or `POEM_`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(token) = std::env::var("AUTH_TOKEN") {
            config.auth.token = token;
        }

        config.auth.my_number = std::env::var("MY_NUMBER").ok().filter(|n| !n.is_empty());

        config.llm.api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            config.llm.base_url = base_url;
        }

        if let Ok(enabled) = std::env::var("POEM_LLM_ENABLED") {
            config.llm.enabled = parse_flag(&enabled, true);
        }

        if let Ok(timeout) = std::env::var("POEM_LLM_TIMEOUT_SECS") {
            config.llm.timeout_secs = timeout.parse().unwrap_or(config.llm.timeout_secs);
        }

        if let Ok(db_path) = std::env::var("POEM_DB_PATH") {
            config.storage.db_path = PathBuf::from(db_path);
        }

        config
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.auth.token.is_empty() {
            return Err(Error::config("AUTH_TOKEN must not be empty"));
        }
        if self.llm.timeout_secs == 0 {
            return Err(Error::config("POEM_LLM_TIMEOUT_SECS must be at least 1"));
        }
        if self.storage.db_path.as_os_str().is_empty() {
            return Err(Error::config("POEM_DB_PATH must not be empty"));
        }
        Ok(())
    }

    /// Settings that work but deserve a warning once logging is up.
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.auth.token == DEFAULT_AUTH_TOKEN {
            warnings.push("AUTH_TOKEN not set - using the default development token");
        }
        if self.auth.my_number.is_none() {
            warnings.push("MY_NUMBER not set - validate will fail after the token check");
        }
        if self.llm.api_key.is_some() && !self.llm.enabled {
            warnings.push("OPENAI_API_KEY is set but POEM_LLM_ENABLED is off - using templates only");
        }
        warnings
    }

    /// Whether the external generator will be consulted.
    pub fn external_generation_enabled(&self) -> bool {
        self.llm.enabled && self.llm.api_key.is_some()
    }
}

/// Parse a boolean-ish environment value, `default` when unrecognized.
pub(crate) fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    pub(crate) static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            for key in [
                "AUTH_TOKEN",
                "MY_NUMBER",
                "OPENAI_API_KEY",
                "OPENAI_BASE_URL",
                "POEM_LLM_ENABLED",
                "POEM_LLM_TIMEOUT_SECS",
                "POEM_DB_PATH",
            ] {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_defaults_from_empty_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let config = Config::from_env();
        assert_eq!(config.auth.token, "dev-token");
        assert!(config.auth.my_number.is_none());
        assert!(config.llm.api_key.is_none());
        assert!(!config.external_generation_enabled());
        assert_eq!(config.storage.db_path, PathBuf::from("usage.db"));
    }

    #[test]
    fn test_auth_and_llm_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("AUTH_TOKEN", "s3cret");
            std::env::set_var("MY_NUMBER", "+10000000000");
            std::env::set_var("OPENAI_API_KEY", "sk-test");
            std::env::set_var("POEM_LLM_TIMEOUT_SECS", "3");
        }
        let config = Config::from_env();
        assert_eq!(config.auth.token, "s3cret");
        assert_eq!(config.auth.my_number.as_deref(), Some("+10000000000"));
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.llm.timeout_secs, 3);
        assert!(config.external_generation_enabled());
        clear_env();
    }

    #[test]
    fn test_llm_can_be_switched_off() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("OPENAI_API_KEY", "sk-test");
            std::env::set_var("POEM_LLM_ENABLED", "false");
        }
        let config = Config::from_env();
        assert!(!config.external_generation_enabled());
        clear_env();
    }

    #[test]
    fn test_secrets_redacted_in_debug() {
        let config = Config {
            auth: AuthConfig {
                token: "super_secret_token".to_string(),
                my_number: None,
            },
            llm: LlmConfig {
                api_key: Some("sk-super-secret".to_string()),
                ..LlmConfig::default()
            },
            ..Config::default()
        };
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
        assert!(!debug_str.contains("sk-super-secret"));
    }

    #[test]
    fn test_warnings_reflect_missing_settings() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        let warnings = Config::from_env().warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("AUTH_TOKEN not set"));
        assert!(warnings[1].starts_with("MY_NUMBER not set"));

        unsafe {
            std::env::set_var("AUTH_TOKEN", "s3cret");
            std::env::set_var("MY_NUMBER", "+10000000000");
            std::env::set_var("OPENAI_API_KEY", "sk-test");
            std::env::set_var("POEM_LLM_ENABLED", "off");
        }
        let warnings = Config::from_env().warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("POEM_LLM_ENABLED"));
        clear_env();
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());
        config.llm.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_token() {
        let mut config = Config::default();
        config.auth.token.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("TRUE", false));
        assert!(parse_flag("1", false));
        assert!(!parse_flag("off", true));
        assert!(parse_flag("maybe", true));
    }
}
