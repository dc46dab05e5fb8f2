//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::context::ToolContext;
#[cfg(feature = "http")]
use super::error::ToolError;
use super::definitions::{GeneratePoemTool, ValidateTool};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    ctx: Arc<ToolContext>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(ctx: Arc<ToolContext>) -> Self {
        Self { ctx }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![ValidateTool::NAME, GeneratePoemTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![ValidateTool::to_tool(), GeneratePoemTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            ValidateTool::NAME => ValidateTool::http_handler(arguments, self.ctx.clone())
                .map_err(ToolError::invalid_arguments),
            GeneratePoemTool::NAME => GeneratePoemTool::http_handler(arguments, self.ctx.clone())
                .await
                .map_err(ToolError::invalid_arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::access::AccessGate;

    fn test_context() -> Arc<ToolContext> {
        Arc::new(
            ToolContext::in_memory(AccessGate::new("dev-token", Some("+1555".to_string())))
                .unwrap(),
        )
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_context());
        let names = registry.tool_names();
        assert_eq!(names, vec!["validate", "generate_poem"]);
    }

    #[test]
    fn test_get_all_tools_have_descriptions() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 2);
        assert!(tools.iter().all(|t| t.description.is_some()));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_validate() {
        let registry = ToolRegistry::new(test_context());
        let result = registry
            .call_tool("validate", serde_json::json!({ "token": "dev-token" }))
            .await
            .unwrap();
        assert_eq!(result["content"][0]["text"], "+1555");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_context());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
