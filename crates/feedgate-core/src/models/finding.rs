use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifies the check that produced a [`Finding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    // Structural
    WordCount,
    TagCount,
    TagLength,
    UncertaintyNote,
    // Stylistic
    Filler,
    SentenceLength,
    SentenceBudget,
    DuplicateSentence,
    // Narrative
    Speculation,
    Dialogue,
    GenericOpening,
    WeakHook,
    LowStakesOpening,
    MiniStory,
    Progression,
    Consequence,
    Density,
    EmotionalStakes,
    LabeledInsight,
    ClosingShape,
    ClosingLength,
}

impl CheckId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WordCount => "word_count",
            Self::TagCount => "tag_count",
            Self::TagLength => "tag_length",
            Self::UncertaintyNote => "uncertainty_note",
            Self::Filler => "filler",
            Self::SentenceLength => "sentence_length",
            Self::SentenceBudget => "sentence_budget",
            Self::DuplicateSentence => "duplicate_sentence",
            Self::Speculation => "speculation",
            Self::Dialogue => "dialogue",
            Self::GenericOpening => "generic_opening",
            Self::WeakHook => "weak_hook",
            Self::LowStakesOpening => "low_stakes_opening",
            Self::MiniStory => "mini_story",
            Self::Progression => "progression",
            Self::Consequence => "consequence",
            Self::Density => "density",
            Self::EmotionalStakes => "emotional_stakes",
            Self::LabeledInsight => "labeled_insight",
            Self::ClosingShape => "closing_shape",
            Self::ClosingLength => "closing_length",
        }
    }

    /// Structural checks run in lenient mode too.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::WordCount | Self::TagCount | Self::TagLength | Self::UncertaintyNote
        )
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Finding {
    pub check: CheckId,
    pub message: String,
}

impl Finding {
    pub fn new(check: CheckId, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }
}
