//! Tone categories and their word banks.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

const ROMANTIC: &[&str] = &[
    "love", "heart", "kiss", "dream", "embrace", "rose", "desire", "whisper",
];
const FUNNY: &[&str] = &[
    "giggle", "pickle", "noodle", "hiccup", "banana", "wobble", "tickle", "cheese",
];
const DARK: &[&str] = &[
    "shadow", "ash", "grave", "raven", "dusk", "sorrow", "void", "thorn",
];
const NEUTRAL: &[&str] = &[
    "light", "time", "stone", "river", "wind", "path", "sky", "echo",
];

/// Emotional color of a poem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneCategory {
    Romantic,
    Funny,
    Dark,
    Neutral,
}

impl ToneCategory {
    pub const ALL: [ToneCategory; 4] = [Self::Romantic, Self::Funny, Self::Dark, Self::Neutral];

    /// Parse a caller-supplied tone. Unknown tones become `Neutral`.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "romantic" => Self::Romantic,
            "funny" => Self::Funny,
            "dark" => Self::Dark,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Romantic => "romantic",
            Self::Funny => "funny",
            Self::Dark => "dark",
            Self::Neutral => "neutral",
        }
    }

    /// The word bank for this tone. Never empty.
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Self::Romantic => ROMANTIC,
            Self::Funny => FUNNY,
            Self::Dark => DARK,
            Self::Neutral => NEUTRAL,
        }
    }

    /// Pick one word from the bank uniformly at random.
    pub fn choose_word<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.words().choose(rng).copied().unwrap_or("light")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_known_tones() {
        assert_eq!(ToneCategory::parse("romantic"), ToneCategory::Romantic);
        assert_eq!(ToneCategory::parse("FUNNY"), ToneCategory::Funny);
        assert_eq!(ToneCategory::parse("Dark"), ToneCategory::Dark);
        assert_eq!(ToneCategory::parse("neutral"), ToneCategory::Neutral);
    }

    #[test]
    fn test_parse_unknown_tone_is_neutral() {
        assert_eq!(ToneCategory::parse("melancholic"), ToneCategory::Neutral);
        assert_eq!(ToneCategory::parse(""), ToneCategory::Neutral);
        assert_eq!(ToneCategory::parse(" dark "), ToneCategory::Neutral);
    }

    #[test]
    fn test_every_bank_is_non_empty() {
        for tone in ToneCategory::ALL {
            assert!(!tone.words().is_empty(), "{} has no words", tone.as_str());
        }
    }

    #[test]
    fn test_choose_word_stays_in_bank() {
        let mut rng = StdRng::seed_from_u64(7);
        for tone in ToneCategory::ALL {
            for _ in 0..50 {
                let word = tone.choose_word(&mut rng);
                assert!(tone.words().contains(&word));
            }
        }
    }
}
