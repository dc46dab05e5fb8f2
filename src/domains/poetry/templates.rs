//! Poem styles and their line templates.
//!
//! Each template line may reference `{theme}` and `{tone_word}`. Lines are
//! listed in their canonical order; the renderer decides how many to keep and
//! whether to shuffle them.

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the capitalized theme.
pub const THEME_PLACEHOLDER: &str = "{theme}";

/// Placeholder replaced by the chosen tone word.
pub const TONE_WORD_PLACEHOLDER: &str = "{tone_word}";

const HAIKU: &[&str] = &[
    "{theme} at dawn breaks,",
    "a {tone_word} drifts on still air,",
    "the hush keeps its {tone_word}.",
];

const SONNET: &[&str] = &[
    "When {theme} rises in the evening glow,",
    "I search the quiet for a hint of {tone_word},",
    "and count the hours as they come and go,",
    "each one a verse that I have never heard.",
    "O {theme}, you wear the colors of the year,",
    "a {tone_word} stitched in every fading seam,",
    "you make the distant and the lost feel near,",
    "and lend the waking world a lighter dream.",
    "Though seasons turn and time forgets its name,",
    "your {tone_word} lingers where the rivers bend,",
    "a steady ember and a patient flame",
    "that asks for nothing and will never end.",
    "So let this {theme} live while lines are read,",
    "and {tone_word} speak for all that's left unsaid.",
];

const FREE_VERSE: &[&str] = &[
    "In the {tone_word} light of {theme}, I stand,",
    "whispers and dreams held in my hand.",
    "{theme} sings a story untold,",
    "woven in stardust, silver and gold.",
    "Every street remembers a {tone_word},",
    "every window keeps a little of {theme},",
    "and the night leans close to listen,",
    "until the morning carries it away.",
];

/// Shape of a poem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleCategory {
    Haiku,
    Sonnet,
    FreeVerse,
}

impl StyleCategory {
    pub const ALL: [StyleCategory; 3] = [Self::Haiku, Self::Sonnet, Self::FreeVerse];

    /// Parse a caller-supplied style. Unknown styles become `FreeVerse`.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "haiku" => Self::Haiku,
            "sonnet" => Self::Sonnet,
            _ => Self::FreeVerse,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Haiku => "haiku",
            Self::Sonnet => "sonnet",
            Self::FreeVerse => "free_verse",
        }
    }

    /// Template lines for this style, in canonical order.
    pub fn template(&self) -> &'static [&'static str] {
        match self {
            Self::Haiku => HAIKU,
            Self::Sonnet => SONNET,
            Self::FreeVerse => FREE_VERSE,
        }
    }
}
