//! Unified path management for scout configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/scout/             # Config directory (platform dependent)
//! ├── config.toml              # Catalog settings
//! └── talents.toml             # Optional custom seed (see `seed_path`)
//! ```

use std::path::PathBuf;

use scout_core::{Result, ScoutError};

/// Unified path management for scout.
pub struct ScoutPaths;

impl ScoutPaths {
    const APP_DIR: &'static str = "scout";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Returns the scout configuration directory (e.g. `~/.config/scout/`).
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::Config` when the platform has no config directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or_else(|| ScoutError::config("Cannot find config directory"))
    }

    /// Returns the path of `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILE))
    }
}
