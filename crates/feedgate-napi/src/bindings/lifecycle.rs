//! Lifecycle bindings: initialize, inspect.

use napi_derive::napi;

use feedgate_core::constants::VERSION;
use feedgate_core::FeedgateError;

use crate::conversions::error_types;
use crate::runtime;

/// Initialize the gate.
///
/// `config_toml`: optional TOML configuration string; defaults otherwise.
/// Optional: bindings called first fall back to defaults, after which this
/// reports "already initialized".
#[napi]
pub fn initialize(config_toml: Option<String>) -> napi::Result<()> {
    runtime::initialize(config_toml)
}

#[napi]
pub fn is_initialized() -> bool {
    runtime::is_initialized()
}

/// The active configuration as JSON.
#[napi]
pub fn current_config() -> napi::Result<serde_json::Value> {
    let rt = runtime::get();
    serde_json::to_value(&rt.config)
        .map_err(|e| error_types::to_napi_error(FeedgateError::from(e)))
}

#[napi]
pub fn version() -> String {
    VERSION.to_string()
}
