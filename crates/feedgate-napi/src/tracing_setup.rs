//! Subscriber installation.

use std::sync::Once;

use feedgate_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the process-wide subscriber.
///
/// The filter comes from the env var named by `log_env_var` (`FEEDGATE_LOG`
/// by default), falling back to `log_level`. Only the first call has any
/// effect; a host that already set a global subscriber keeps it.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(&config.log_env_var)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let installed = if config.json_logs {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_target(true))
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_line_number(true))
                .with(filter)
                .try_init()
        };

        if installed.is_err() {
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}
