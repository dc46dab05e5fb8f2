//! OpenAI-compatible text generator.
//!
//! Works with OpenAI and any endpoint that speaks the chat-completions API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::error::GenerationError;
use crate::core::config::LlmConfig;

/// Model requested from the external API.
pub const MODEL: &str = "gpt-4o-mini";

/// Output token budget for one poem.
pub const MAX_TOKENS: u32 = 400;

/// Sampling temperature for one poem.
pub const TEMPERATURE: f32 = 0.8;

/// Something that can turn a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce text for `prompt`. One attempt, no retries.
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Chat-completions client.
pub struct OpenAiGenerator {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiGenerator {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Build a generator from config, or `None` when the external path is off.
    pub fn from_config(config: &LlmConfig) -> Result<Option<Self>, GenerationError> {
        let Some(api_key) = config.api_key.as_ref().filter(|_| config.enabled) else {
            return Ok(None);
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Some(Self::new(client, config.base_url.clone(), api_key.clone())))
    }
}

impl std::fmt::Debug for OpenAiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiGenerator")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest::poem(prompt);

        debug!("Requesting poem from {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status, message });
        }

        let body: ChatResponse = response.json().await?;
        body.into_text()
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: &'static str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

impl ChatRequest {
    fn poem(prompt: &str) -> Self {
        Self {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Some(prompt.to_string()),
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

impl ChatResponse {
    fn into_text(self) -> Result<String, GenerationError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(ChatRequest::poem("Write a poem")).unwrap();
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["max_tokens"], 400);
        assert!((body["temperature"].as_f64().unwrap() - 0.8).abs() < 1e-6);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Write a poem");
    }

    #[test]
    fn test_response_text_is_trimmed() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "  Roses are red\n" } }]
        }))
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "Roses are red");
    }

    #[test]
    fn test_response_without_choices_is_empty() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(matches!(
            response.into_text(),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_response_with_blank_content_is_empty() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": "   " } }]
        }))
        .unwrap();
        assert!(matches!(
            response.into_text(),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_from_config_disabled_without_key() {
        let config = LlmConfig::default();
        assert!(OpenAiGenerator::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn test_from_config_respects_enabled_flag() {
        let config = LlmConfig {
            api_key: Some("sk-test".to_string()),
            enabled: false,
            ..LlmConfig::default()
        };
        assert!(OpenAiGenerator::from_config(&config).unwrap().is_none());

        let config = LlmConfig {
            enabled: true,
            ..config
        };
        assert!(OpenAiGenerator::from_config(&config).unwrap().is_some());
    }

    #[test]
    fn test_debug_redacts_key() {
        let generator = OpenAiGenerator::new(Client::new(), "http://localhost/v1/", "sk-secret");
        let debug = format!("{:?}", generator);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("http://localhost/v1\""));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let generator = OpenAiGenerator::new(client, "http://127.0.0.1:1/v1", "sk-test");
        let result = generator.complete("Write a poem").await;
        assert!(matches!(result, Err(GenerationError::Request(_))));
    }
}
