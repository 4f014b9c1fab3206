use serde::{Deserialize, Serialize};

use super::defaults;
use crate::post::PostLength;

/// Validation subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Strictness used when a caller passes no options.
    pub strict_by_default: bool,
    /// Word ranges and sentence budgets per post length.
    pub lengths: LengthTable,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_by_default: defaults::DEFAULT_STRICT,
            lengths: LengthTable::default(),
        }
    }
}

/// Word range and sentence budget for one [`PostLength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthProfile {
    pub min_words: usize,
    pub max_words: usize,
    pub max_sentences: usize,
}

impl LengthProfile {
    pub fn contains_word_count(&self, words: usize) -> bool {
        (self.min_words..=self.max_words).contains(&words)
    }
}

/// Static mapping from [`PostLength`] to its [`LengthProfile`].
///
/// An override in TOML replaces a whole profile, so each
/// `[validation.lengths.<name>]` table must name all three keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthTable {
    #[serde(default = "short_profile")]
    pub short: LengthProfile,
    #[serde(default = "medium_profile")]
    pub medium: LengthProfile,
}

impl LengthTable {
    pub fn profile(&self, length: PostLength) -> &LengthProfile {
        match length {
            PostLength::Short => &self.short,
            PostLength::Medium => &self.medium,
        }
    }
}

impl Default for LengthTable {
    fn default() -> Self {
        Self {
            short: short_profile(),
            medium: medium_profile(),
        }
    }
}

fn short_profile() -> LengthProfile {
    LengthProfile {
        min_words: defaults::DEFAULT_SHORT_MIN_WORDS,
        max_words: defaults::DEFAULT_SHORT_MAX_WORDS,
        max_sentences: defaults::DEFAULT_SHORT_MAX_SENTENCES,
    }
}

fn medium_profile() -> LengthProfile {
    LengthProfile {
        min_words: defaults::DEFAULT_MEDIUM_MIN_WORDS,
        max_words: defaults::DEFAULT_MEDIUM_MAX_WORDS,
        max_sentences: defaults::DEFAULT_MEDIUM_MAX_SENTENCES,
    }
}
