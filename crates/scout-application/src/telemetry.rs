//! Tracing subscriber setup.

use scout_core::{Result, ScoutError};
use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` (typically
/// `CatalogSettings::log_level`) is used as the filter directive.
///
/// # Errors
///
/// - `ScoutError::Config`: the directive in effect is not a valid filter
/// - `ScoutError::Internal`: a global subscriber is already installed
pub fn init_tracing(default_level: &str) -> Result<()> {
    let env_directive = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env_directive.as_deref(), default_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| ScoutError::internal(format!("Failed to install tracing subscriber: {}", e)))
}

fn build_filter(env_directive: Option<&str>, default_level: &str) -> Result<EnvFilter> {
    let directive = env_directive
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(default_level);
    EnvFilter::try_new(directive)
        .map_err(|e| ScoutError::config(format!("Invalid log filter '{}': {}", directive, e)))
}
