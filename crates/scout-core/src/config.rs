//! Catalog configuration model.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::talent::SortKey;

/// Runtime settings for a talent catalog.
///
/// Loaded from `config.toml` by the infrastructure layer; every field has a
/// default so a missing or partial file is fine.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    /// Artificial delay applied to every catalog call, in milliseconds.
    /// Emulates a networked backend in demos; 0 disables it.
    #[serde(default)]
    pub simulated_latency_ms: u64,
    /// Ordering used when the view does not pick one.
    #[serde(default)]
    pub default_sort: SortKey,
    /// Seed file replacing the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 0,
            default_sort: SortKey::default(),
            seed_path: None,
            log_level: default_log_level(),
        }
    }
}

impl CatalogSettings {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RootConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
}
