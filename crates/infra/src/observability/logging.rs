//! Tracing subscriber setup

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use veggieworld_domain::{DashboardError, LoggingConfig, Result};

/// Environment variable holding an `EnvFilter` directive string
pub const LOG_FILTER_ENV: &str = "VEGGIEWORLD_LOG";

/// Build the filter: `VEGGIEWORLD_LOG` wins over the configured level.
///
/// # Errors
/// Returns `DashboardError::Config` if the configured level is not a valid
/// filter directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_FILTER_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            DashboardError::Config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` if a subscriber was already installed, so repeated
/// calls from tests or embedding shells are harmless.
///
/// # Errors
/// Returns `DashboardError::Config` for an invalid log level.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry.with(fmt::layer().json().with_current_span(false)).try_init().is_ok()
    } else {
        registry.with(fmt::layer().with_target(false)).try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "tracing_initialized");
    }
    Ok(installed)
}
