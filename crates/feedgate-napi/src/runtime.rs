//! The configured validator shared by every binding.
//!
//! Stored behind `OnceLock`. `initialize()` installs it explicitly; `get()`
//! falls back to a default runtime when nothing was installed.

use std::sync::{Arc, OnceLock};

use feedgate_core::errors::FeedgateResult;
use feedgate_core::GateConfig;
use feedgate_validation::ContentValidator;

use crate::conversions::error_types;
use crate::tracing_setup;

/// Global singleton.
static RUNTIME: OnceLock<Arc<GateRuntime>> = OnceLock::new();

pub struct GateRuntime {
    pub validator: ContentValidator,
    pub config: GateConfig,
}

impl GateRuntime {
    fn new(config_toml: Option<&str>) -> FeedgateResult<Self> {
        let config = match config_toml {
            Some(source) => GateConfig::from_toml(source)?,
            None => GateConfig::default(),
        };
        Ok(Self::from_config(config))
    }

    fn from_config(config: GateConfig) -> Self {
        Self {
            validator: ContentValidator::from_gate_config(&config),
            config,
        }
    }
}

/// Initialize the global runtime from an optional TOML document.
///
/// Returns an error if already initialized (including lazily, by an
/// earlier binding call) or if the config is rejected.
pub fn initialize(config_toml: Option<String>) -> napi::Result<()> {
    let runtime = GateRuntime::new(config_toml.as_deref()).map_err(error_types::to_napi_error)?;
    RUNTIME
        .set(Arc::new(runtime))
        .map_err(|_| error_types::already_initialized())?;
    if let Some(rt) = RUNTIME.get() {
        tracing_setup::init_tracing(&rt.config.observability);
        tracing::info!(
            strict_by_default = rt.config.validation.strict_by_default,
            "feedgate runtime initialized"
        );
    }
    Ok(())
}

/// The global runtime, created with defaults on first use.
pub fn get() -> Arc<GateRuntime> {
    RUNTIME
        .get_or_init(|| {
            let runtime = GateRuntime::from_config(GateConfig::default());
            tracing_setup::init_tracing(&runtime.config.observability);
            Arc::new(runtime)
        })
        .clone()
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}
