//! Generate poem tool definition.
//!
//! Writes a poem from a theme, style, length and tone. Every call is logged
//! to the usage table before any text is produced.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::common::{error_result, success_result};
use crate::domains::tools::ToolContext;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the generate poem tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeneratePoemParams {
    /// Poem topic.
    #[schemars(description = "Poem topic")]
    pub theme: String,

    /// Poem style.
    #[schemars(description = "haiku|sonnet|free_verse")]
    #[serde(default = "default_style")]
    pub style: String,

    /// Poem length.
    #[schemars(description = "short|medium|long")]
    #[serde(default = "default_length")]
    pub length: String,

    /// Poem tone.
    #[schemars(description = "romantic|funny|dark|neutral")]
    #[serde(default = "default_tone")]
    pub tone: String,
}

fn default_style() -> String {
    "free_verse".to_string()
}

fn default_length() -> String {
    "short".to_string()
}

fn default_tone() -> String {
    "romantic".to_string()
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Generate poem tool.
pub struct GeneratePoemTool;

impl GeneratePoemTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "generate_poem";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Generate a poem based on theme, style, length, and tone";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(style = %params.style, length = %params.length, tone = %params.tone))]
    pub async fn execute(params: &GeneratePoemParams, ctx: &ToolContext) -> CallToolResult {
        let result = ctx
            .poems
            .generate(&params.theme, &params.style, &params.length, &params.tone)
            .await;

        match result {
            Ok(poem) => {
                info!("Poem generated ({:?})", poem.source);
                success_result(poem.text)
            }
            Err(e) => error_result(&format!("Failed to record usage: {}", e)),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        ctx: Arc<ToolContext>,
    ) -> Result<serde_json::Value, String> {
        let params: GeneratePoemParams = serde_json::from_value(arguments)
            .map_err(|e| format!("Invalid arguments for '{}': {}", Self::NAME, e))?;

        let result = Self::execute(&params, &ctx).await;

        Ok(super::super::common::http_result(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GeneratePoemParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(ctx: Arc<ToolContext>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |call: ToolCallContext<'_, S>| {
            let args = call.arguments.clone().unwrap_or_default();
            let ctx = ctx.clone();
            async move {
                let params: GeneratePoemParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
