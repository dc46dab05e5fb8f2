//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod access;
pub mod common;
pub mod poem;

pub use access::{ValidateParams, ValidateTool};
pub use poem::{GeneratePoemParams, GeneratePoemTool};
