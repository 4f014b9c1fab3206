pub mod defaults;
mod observability_config;
mod validation_config;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use validation_config::{LengthProfile, LengthTable, ValidationConfig};

use crate::errors::{FeedgateError, FeedgateResult};
use crate::post::PostLength;

/// Top-level configuration, loadable from TOML.
///
/// Every section and key is optional; missing values fall back to
/// [`defaults`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub validation: ValidationConfig,
    pub observability: ObservabilityConfig,
}

impl GateConfig {
    /// Parse and sanity-check a TOML document.
    pub fn from_toml(source: &str) -> FeedgateResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| FeedgateError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> FeedgateResult<String> {
        toml::to_string(self).map_err(|e| FeedgateError::ConfigError(e.to_string()))
    }

    /// Reject length profiles that no body could ever satisfy.
    pub fn validate(&self) -> FeedgateResult<()> {
        for length in PostLength::ALL {
            let profile = self.validation.lengths.profile(length);
            if profile.min_words > profile.max_words {
                return Err(FeedgateError::ConfigError(format!(
                    "{length}: min_words ({}) exceeds max_words ({})",
                    profile.min_words, profile.max_words
                )));
            }
            if profile.max_sentences == 0 {
                return Err(FeedgateError::ConfigError(format!(
                    "{length}: max_sentences must be at least 1"
                )));
            }
        }
        Ok(())
    }
}
