use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::FeedgateError;

/// Target length of a generated post.
///
/// Word ranges and sentence budgets live in
/// [`crate::config::LengthTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PostLength {
    Short,
    Medium,
}

impl PostLength {
    pub const ALL: [PostLength; 2] = [Self::Short, Self::Medium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
        }
    }

    /// Capitalized label used in diagnostics ("Short posts ...").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
        }
    }
}

impl fmt::Display for PostLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostLength {
    type Err = FeedgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FeedgateError::UnknownLength {
                length: s.to_string(),
            })
    }
}
