//! Configuration management for ved.
//!
//! TOML settings under the XDG config directory, created with default
//! values on first run. Missing keys fall back to defaults through
//! serde, so old config files keep working as settings are added.

mod settings;
mod xdg;

pub use settings::{Config, EditorSettings, LoggingSettings};
pub use xdg::{get_cache_dir, get_config_dir};

use anyhow::Result;
use std::path::PathBuf;

/// Default values as constants
pub mod defaults {
    pub const SHOW_POSITION: bool = true;
    pub const MIN_LOG_LEVEL: &str = "info";
}

impl Config {
    /// Path of the config file: `<config dir>/config.toml`.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(xdg::get_config_dir()?.join("config.toml"))
    }

    /// Path of the log file: `<cache dir>/ved.log`.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(xdg::get_cache_dir()?.join("ved.log"))
    }

    /// Load configuration from file.
    ///
    /// On first run, creates the config file with default values.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
