//! Poem generation service.
//!
//! Records every request in the usage log, then asks the external generator
//! (when configured) and falls back to the template renderer on any failure.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use super::error::GenerationError;
use super::openai::TextGenerator;
use crate::domains::poetry::PoemRenderer;
use crate::domains::usage::{StorageError, UsageRecord, UsageRecorder};

/// Where a poem's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PoemSource {
    External,
    Template,
}

/// Result of a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPoem {
    pub text: String,
    pub source: PoemSource,
}

/// Handles `generate_poem` calls.
pub struct PoemService {
    recorder: Arc<UsageRecorder>,
    generator: Option<Arc<dyn TextGenerator>>,
    renderer: PoemRenderer,
    timeout: Duration,
}

impl PoemService {
    /// Create a service that only uses the template renderer.
    pub fn new(recorder: Arc<UsageRecorder>) -> Self {
        Self {
            recorder,
            generator: None,
            renderer: PoemRenderer::new(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Consult `generator` first, bounded by `timeout`.
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        self.generator = Some(generator);
        self.timeout = timeout;
        self
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Record the request and produce a poem.
    ///
    /// Only a usage log failure is returned as an error; external generation
    /// problems fall back to the template renderer.
    #[instrument(skip(self), fields(source))]
    pub async fn generate(
        &self,
        theme: &str,
        style: &str,
        length: &str,
        tone: &str,
    ) -> Result<GeneratedPoem, StorageError> {
        let record = self.record_usage(theme, style, length, tone).await?;
        info!(id = %record.id, "Poem requested");

        if let Some(generator) = &self.generator {
            let prompt = build_prompt(theme, style, length, tone);
            match self.try_external(generator.as_ref(), &prompt).await {
                Ok(text) => {
                    tracing::Span::current().record("source", "external");
                    return Ok(GeneratedPoem {
                        text,
                        source: PoemSource::External,
                    });
                }
                Err(e) => warn!("External generation failed, using templates: {}", e),
            }
        }

        tracing::Span::current().record("source", "template");
        Ok(GeneratedPoem {
            text: self.renderer.render(theme, style, length, tone),
            source: PoemSource::Template,
        })
    }

    /// Write the usage row off the async worker; SQLite may wait on its busy
    /// timeout.
    async fn record_usage(
        &self,
        theme: &str,
        style: &str,
        length: &str,
        tone: &str,
    ) -> Result<UsageRecord, StorageError> {
        let recorder = Arc::clone(&self.recorder);
        let (theme, style, length, tone) = (
            theme.to_string(),
            style.to_string(),
            length.to_string(),
            tone.to_string(),
        );

        tokio::task::spawn_blocking(move || recorder.record(&theme, &style, &length, &tone))
            .await?
    }

    async fn try_external(
        &self,
        generator: &dyn TextGenerator,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        tokio::time::timeout(self.timeout, generator.complete(prompt))
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout))?
    }
}

/// Natural-language prompt sent to the external generator.
pub fn build_prompt(theme: &str, style: &str, length: &str, tone: &str) -> String {
    format!("Write a {length} {style} poem about '{theme}' in a {tone} tone.")
}
