use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::FeedgateError;

/// Content category of a feed. Selects which narrative rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeedMode {
    Biography,
    Trivia,
    Niche,
    History,
    Science,
}

impl FeedMode {
    pub const ALL: [FeedMode; 5] = [
        Self::Biography,
        Self::Trivia,
        Self::Niche,
        Self::History,
        Self::Science,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Biography => "BIOGRAPHY",
            Self::Trivia => "TRIVIA",
            Self::Niche => "NICHE",
            Self::History => "HISTORY",
            Self::Science => "SCIENCE",
        }
    }
}

impl fmt::Display for FeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedMode {
    type Err = FeedgateError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FeedgateError::UnknownMode {
                mode: s.to_string(),
            })
    }
}
