//! Poetry domain module.
//!
//! Static word banks and line templates plus the renderer that combines
//! them into a poem.
//!
//! ## Architecture
//!
//! - `words.rs` - Tone categories and their word banks
//! - `templates.rs` - Style categories and their line templates
//! - `renderer.rs` - Length policy and the template renderer

mod renderer;
mod templates;
mod words;

pub use renderer::{LengthCategory, PoemRenderer, PoemRequest, capitalize};
pub use templates::{StyleCategory, THEME_PLACEHOLDER, TONE_WORD_PLACEHOLDER};
pub use words::ToneCategory;
