//! Shared state handed to every tool.

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::domains::access::AccessGate;
use crate::domains::generation::{OpenAiGenerator, PoemService};
use crate::domains::usage::UsageRecorder;

/// Services the tools operate on.
///
/// Built once at startup and shared behind an `Arc` by every transport.
pub struct ToolContext {
    pub gate: AccessGate,
    pub poems: PoemService,
}

impl ToolContext {
    pub fn new(gate: AccessGate, poems: PoemService) -> Self {
        Self { gate, poems }
    }

    /// Open the usage log and wire up the optional external generator.
    pub fn from_config(config: &Config) -> Result<Self> {
        let recorder = Arc::new(UsageRecorder::open(&config.storage.db_path)?);
        let mut poems = PoemService::new(recorder);

        if let Some(generator) = OpenAiGenerator::from_config(&config.llm)? {
            info!("External poem generation enabled ({})", config.llm.base_url);
            poems = poems.with_generator(
                Arc::new(generator),
                Duration::from_secs(config.llm.timeout_secs),
            );
        } else {
            info!("External poem generation disabled, using templates only");
        }

        Ok(Self::new(AccessGate::from_config(&config.auth), poems))
    }

    /// Template-only context over an in-memory usage log.
    pub fn in_memory(gate: AccessGate) -> Result<Self> {
        let recorder = Arc::new(UsageRecorder::open_in_memory()?);
        Ok(Self::new(gate, PoemService::new(recorder)))
    }
}
