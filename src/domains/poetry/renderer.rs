//! Template-based poem renderer.
//!
//! This is the fallback path used whenever no external text generator is
//! configured or the external call fails.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::templates::{StyleCategory, THEME_PLACEHOLDER, TONE_WORD_PLACEHOLDER};
use super::words::ToneCategory;

/// How much of a template to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthCategory {
    Short,
    Medium,
    Long,
}

impl LengthCategory {
    /// Parse a caller-supplied length. Only `short` and `medium` truncate;
    /// anything else keeps the whole template.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "short" => Self::Short,
            "medium" => Self::Medium,
            _ => Self::Long,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Maximum number of lines kept, `None` for all of them.
    pub fn line_limit(&self) -> Option<usize> {
        match self {
            Self::Short => Some(3),
            Self::Medium => Some(6),
            Self::Long => None,
        }
    }
}

/// A parsed poem request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemRequest {
    pub theme: String,
    pub style: StyleCategory,
    pub length: LengthCategory,
    pub tone: ToneCategory,
}

impl PoemRequest {
    pub fn parse(theme: &str, style: &str, length: &str, tone: &str) -> Self {
        Self {
            theme: theme.to_string(),
            style: StyleCategory::parse(style),
            length: LengthCategory::parse(length),
            tone: ToneCategory::parse(tone),
        }
    }
}

/// Renders poems from the built-in templates and word banks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoemRenderer;

impl PoemRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a poem from raw caller strings using the thread-local RNG.
    pub fn render(&self, theme: &str, style: &str, length: &str, tone: &str) -> String {
        let request = PoemRequest::parse(theme, style, length, tone);
        self.render_with(&request, &mut rand::thread_rng())
    }

    /// Render a parsed request with the given RNG.
    pub fn render_with<R: Rng + ?Sized>(&self, request: &PoemRequest, rng: &mut R) -> String {
        let tone_word = request.tone.choose_word(rng);
        let theme = capitalize(&request.theme);

        let mut lines: Vec<String> = request
            .style
            .template()
            .iter()
            .map(|line| {
                line.replace(TONE_WORD_PLACEHOLDER, tone_word)
                    .replace(THEME_PLACEHOLDER, &theme)
            })
            .collect();

        if let Some(limit) = request.length.line_limit() {
            lines.truncate(limit);
        }

        if request.length != LengthCategory::Long && lines.len() > 1 {
            lines[1..].shuffle(rng);
        }

        debug!(
            style = request.style.as_str(),
            length = request.length.as_str(),
            tone_word,
            lines = lines.len(),
            "Rendered template poem"
        );

        lines.join("\n")
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
