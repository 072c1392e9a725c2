//! Configuration structures for ved settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Editor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Show the row/col/offset counters on the status line
    #[serde(default = "default_show_position")]
    pub show_position: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            show_position: default_show_position(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
        }
    }
}

fn default_show_position() -> bool {
    defaults::SHOW_POSITION
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.editor.show_position);
        assert_eq!(config.logging.min_level, "info");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[logging]\nmin_level = \"debug\"\n").unwrap();
        assert_eq!(config.logging.min_level, "debug");
        assert!(config.editor.show_position);
    }

    #[test]
    fn test_round_trip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.editor.show_position, config.editor.show_position);
        assert_eq!(parsed.logging.min_level, config.logging.min_level);
    }
}
