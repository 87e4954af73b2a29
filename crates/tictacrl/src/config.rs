//! Configuration for the terminal driver.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings read from `tictacrl.toml`.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TictacrlConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Text printed after the player's mark when asking for a move.
    #[serde(default = "default_prompt")]
    prompt: String,

    /// Board display options.
    #[serde(default)]
    display: DisplayConfig,
}

/// Board display options.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Print the coordinate legend before the first move.
    #[serde(default = "default_show_legend")]
    show_legend: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_prompt() -> String {
    " > ".to_string()
}

fn default_show_legend() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_legend: default_show_legend(),
        }
    }
}

impl Default for TictacrlConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            prompt: default_prompt(),
            display: DisplayConfig::default(),
        }
    }
}

impl TictacrlConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TictacrlConfig::from_toml("").unwrap();
        assert_eq!(config, TictacrlConfig::default());
        assert_eq!(config.log_filter(), "warn");
        assert!(*config.display().show_legend());
    }

    #[test]
    fn test_partial_overrides() {
        let config = TictacrlConfig::from_toml(
            r#"
            log_filter = "tictacrl_engine=debug"

            [display]
            show_legend = false
            "#,
        )
        .unwrap();
        assert_eq!(config.log_filter(), "tictacrl_engine=debug");
        assert_eq!(config.prompt(), " > ");
        assert!(!*config.display().show_legend());
    }

    #[test]
    fn test_parse_error_reports_location() {
        let err = TictacrlConfig::from_toml("log_filter = [").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = TictacrlConfig::load_or_default("/nonexistent/tictacrl.toml").unwrap();
        assert_eq!(config, TictacrlConfig::default());
    }
}
