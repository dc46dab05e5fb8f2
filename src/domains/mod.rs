//! Domains module containing business logic organized by bounded contexts.
//!
//! - **poetry**: word banks, templates and the template renderer
//! - **usage**: append-only SQLite log of generation requests
//! - **access**: the static-token gate behind `validate`
//! - **generation**: external text generation with template fallback
//! - **tools**: MCP tool definitions wiring the above together

pub mod access;
pub mod generation;
pub mod poetry;
pub mod tools;
pub mod usage;
