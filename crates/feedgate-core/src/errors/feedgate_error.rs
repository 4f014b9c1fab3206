use super::SchemaError;

/// Top-level error type for FeedGate.
///
/// Content-quality problems are never errors; they are reported in a
/// [`crate::Verdict`]. Only malformed inputs and bad configuration end up here.
#[derive(Debug, thiserror::Error)]
pub enum FeedgateError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("unknown feed mode: {mode}")]
    UnknownMode { mode: String },

    #[error("unknown post length: {length}")]
    UnknownLength { length: String },

    #[error("unknown confidence: {confidence} (expected high, medium, or low)")]
    UnknownConfidence { confidence: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FeedgateError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl FeedgateError {
    /// Stable code prefixed to messages that cross the JS boundary.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Schema(SchemaError::Invalid { .. }) => "SCHEMA_INVALID",
            Self::Schema(SchemaError::MalformedJson { .. }) => "MALFORMED_JSON",
            Self::UnknownMode { .. } => "UNKNOWN_MODE",
            Self::UnknownLength { .. } => "UNKNOWN_LENGTH",
            Self::UnknownConfidence { .. } => "UNKNOWN_CONFIDENCE",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::SerializationError(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Convenience alias used across the workspace.
pub type FeedgateResult<T> = Result<T, FeedgateError>;
