//! Driver configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::Player;
use tracing::{debug, info, instrument};

/// Configuration for the command-line driver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Mark the human plays in interactive games.
    #[serde(default = "default_human_mark")]
    human_mark: Player,

    /// Whether to report the game-theoretic value alongside a move.
    #[serde(default = "default_show_value")]
    show_value: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_mark() -> Player {
    Player::O
}

fn default_show_value() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl DriverConfig {
    /// Creates a configuration.
    pub fn new(human_mark: Player, show_value: bool, log_filter: impl Into<String>) -> Self {
        Self {
            human_mark,
            show_value,
            log_filter: log_filter.into(),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Reads configuration from a TOML file that must exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human_mark = %config.human_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Returns a copy with the human mark replaced.
    pub fn with_human_mark(mut self, human_mark: Player) -> Self {
        self.human_mark = human_mark;
        self
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new(default_human_mark(), default_show_value(), default_log_filter())
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
    fn test_defaults() {
        let config = DriverConfig::default();
        assert_eq!(*config.human_mark(), Player::O);
        assert!(*config.show_value());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: DriverConfig = toml::from_str("human_mark = \"X\"").unwrap();
        assert_eq!(*config.human_mark(), Player::X);
        assert!(*config.show_value());
    }

    #[test]
    fn test_with_human_mark() {
        let config = DriverConfig::default().with_human_mark(Player::X);
        assert_eq!(*config.human_mark(), Player::X);
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
