//! Poem MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing two tools: `validate`, a
//! static-token gate, and `generate_poem`, which logs each request to SQLite
//! and writes a poem with an OpenAI-compatible API or the built-in templates.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **poetry**: word banks, templates and the template renderer
//!   - **usage**: the append-only usage log
//!   - **access**: the token gate
//!   - **generation**: external generation with template fallback
//!   - **tools**: MCP tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use poem_mcp_server::{Config, McpServer, domains::tools::ToolContext};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let ctx = ToolContext::from_config(&config)?;
//!     let server = McpServer::new(config, ctx);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
