mod loader;
mod types;

pub use loader::{ConfigError, MIN_COMPACT_CARD_WIDTH};
pub use types::{CatalogConfig, Config, LoggingConfig, UiConfig};
