use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

pub const MIN_COMPACT_CARD_WIDTH: u16 = 20;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/vitrine/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("vitrine").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Featured cards are at least `MIN_COMPACT_CARD_WIDTH` columns wide
    /// - Poll interval and scroll step are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.compact_card_width < MIN_COMPACT_CARD_WIDTH {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.compact_card_width must be at least {} (got {})",
                    MIN_COMPACT_CARD_WIDTH, self.ui.compact_card_width
                ),
            });
        }

        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.poll_interval_ms must be greater than 0".to_string(),
            });
        }

        if self.ui.scroll_step == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.scroll_step must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
