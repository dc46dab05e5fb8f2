//! Validate tool definition.
//!
//! Checks a bearer token and hands back the configured identity.

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

/// Parameters for the validate tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ValidateParams {
    /// Token issued to the client.
    #[schemars(description = "Bearer token issued to the client")]
    pub token: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Validate tool - token check used by clients to authenticate.
pub struct ValidateTool;

impl ValidateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "validate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Validate a bearer token and return the phone number of the server owner.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &ValidateParams, ctx: &ToolContext) -> CallToolResult {
        match ctx.gate.validate(&params.token) {
            Ok(identity) => {
                info!("Token validated");
                success_result(identity)
            }
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        ctx: Arc<ToolContext>,
    ) -> Result<serde_json::Value, String> {
        let params: ValidateParams = serde_json::from_value(arguments)
            .map_err(|e| format!("Invalid arguments for '{}': {}", Self::NAME, e))?;

        let result = Self::execute(&params, &ctx);

        Ok(super::super::common::http_result(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ValidateParams>(),
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
                let params: ValidateParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &ctx))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
