//! XDG Base Directory support for ved.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "ved";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/ved` or `~/.config/ved`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the cache directory following XDG conventions.
///
/// Returns `$XDG_CACHE_HOME/ved` or `~/.cache/ved`. The log file
/// lives here.
pub fn get_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine cache directory")
}
