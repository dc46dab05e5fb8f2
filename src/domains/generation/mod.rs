//! Generation domain module.
//!
//! Composes the usage log, the optional external text generator and the
//! template renderer into the `generate_poem` operation.
//!
//! ## Architecture
//!
//! - `openai.rs` - `TextGenerator` trait and the OpenAI-compatible client
//! - `service.rs` - `PoemService`, the record-then-generate-or-fallback flow
//! - `error.rs` - External generation errors

mod error;
mod openai;
mod service;

pub use error::GenerationError;
pub use openai::{OpenAiGenerator, TextGenerator};
pub use service::{GeneratedPoem, PoemService, PoemSource};
