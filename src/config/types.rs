use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where product data comes from.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CatalogConfig {
    /// Product file (TOML, or JSON by extension). Built-in data when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Screen behaviour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// How long the event loop waits for input before checking for shutdown (default: 250).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Width of featured cards in columns (default: 34).
    #[serde(default = "default_compact_card_width")]
    pub compact_card_width: u16,
    /// Capture mouse clicks and wheel (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
    /// Rows scrolled per wheel notch (default: 3).
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
}

/// Log output. The screen owns stdout, so logs only go to a file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `VITRINE_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Logging is off when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_poll_interval_ms() -> u64 {
    250
}

fn default_compact_card_width() -> u16 {
    34
}

fn default_mouse() -> bool {
    true
}

fn default_scroll_step() -> u16 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            compact_card_width: default_compact_card_width(),
            mouse: default_mouse(),
            scroll_step: default_scroll_step(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
