use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration consumed by the process entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter used when the env var is unset, e.g. `"info"` or
    /// `"feedgate_validation=debug"`.
    pub log_level: String,
    /// Environment variable consulted for the filter first.
    pub log_env_var: String,
    /// Emit JSON lines instead of human-readable output.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            log_env_var: defaults::DEFAULT_LOG_ENV_VAR.to_string(),
            json_logs: defaults::DEFAULT_JSON_LOGS,
        }
    }
}
