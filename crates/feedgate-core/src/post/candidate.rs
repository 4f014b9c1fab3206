use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Confidence;

/// An LLM-produced post awaiting quality-gate approval.
///
/// Instances produced by `feedgate-schema` hold trimmed field values that
/// already satisfy the schema bounds in [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CandidatePost {
    pub title: String,
    pub body: String,
    pub post_type: String,
    pub tags: Vec<String>,
    pub confidence: Confidence,
    /// Required when `confidence` is `low`.
    #[serde(default)]
    pub uncertainty_note: Option<String>,
}

impl CandidatePost {
    /// Whether a non-blank uncertainty note is present.
    pub fn has_uncertainty_note(&self) -> bool {
        self.uncertainty_note
            .as_deref()
            .is_some_and(|note| !note.trim().is_empty())
    }
}
