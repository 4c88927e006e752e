//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/scout/config.toml).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use scout_core::{CatalogSettings, Result, RootConfig};

use crate::paths::ScoutPaths;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file; `None` means the platform default location.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService {
    /// Creates a ConfigService reading the platform default config file.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading a specific file (for tests and embedding).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A missing or unreadable file yields the defaults; the failure is logged.
    pub fn get_config(&self) -> RootConfig {
        {
            let cached = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref config) = *cached {
                return config.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|e| {
            tracing::warn!("[Config] Failed to load config, using defaults: {}", e);
            RootConfig::default()
        });

        let mut cache = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *cache = Some(loaded.clone());
        loaded
    }

    /// Shortcut for the `[catalog]` section.
    pub fn catalog_settings(&self) -> CatalogSettings {
        self.get_config().catalog
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut cache = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *cache = None;
    }

    /// Reads and parses the config file without touching the cache.
    ///
    /// A relative `seed_path` is resolved against the config file's directory.
    ///
    /// # Errors
    ///
    /// - `ScoutError::Config`: no config directory on this platform
    /// - `ScoutError::Io`: the file exists but cannot be read
    /// - `ScoutError::Serialization`: the file is not valid TOML
    pub fn load_config(&self) -> Result<RootConfig> {
        let path = self.config_path()?;
        if !path.exists() {
            tracing::info!(
                "[Config] {} not found, using defaults",
                path.display()
            );
            return Ok(RootConfig::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut config: RootConfig = toml::from_str(&content)?;

        if let Some(seed) = config.catalog.seed_path.take() {
            config.catalog.seed_path = Some(resolve_relative(&path, seed));
        }

        tracing::debug!("[Config] Loaded {}", path.display());
        Ok(config)
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => ScoutPaths::config_file(),
        }
    }
}

fn resolve_relative(config_file: &Path, target: PathBuf) -> PathBuf {
    if target.is_absolute() {
        return target;
    }
    match config_file.parent() {
        Some(dir) => dir.join(target),
        None => target,
    }
}
