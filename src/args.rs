use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "vitrine", version, about = "Product catalog in the terminal")]
pub struct Cli {
    /// Config file (default: ~/.config/vitrine/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Product file (TOML, or JSON by extension) replacing the built-in catalog
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print one rendered frame as plain text and exit
    #[arg(long)]
    pub snapshot: bool,

    /// Snapshot width in columns
    #[arg(long, default_value_t = 80, requires = "snapshot")]
    pub width: u16,

    /// Snapshot height in rows
    #[arg(long, default_value_t = 48, requires = "snapshot")]
    pub height: u16,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.catalog {
            config.catalog.path = Some(path.clone());
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_paths() {
        let cli = Cli::parse_from(["vitrine", "--catalog", "products.toml", "--log-file", "v.log"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.catalog.path, Some(PathBuf::from("products.toml")));
        assert_eq!(config.logging.file, Some(PathBuf::from("v.log")));
    }

    #[test]
    fn no_overrides_keep_config() {
        let cli = Cli::parse_from(["vitrine"]);
        let mut config = Config::default();
        config.catalog.path = Some(PathBuf::from("mine.toml"));
        cli.apply(&mut config);
        assert_eq!(config.catalog.path, Some(PathBuf::from("mine.toml")));
        assert!(!cli.snapshot);
        assert_eq!((cli.width, cli.height), (80, 48));
    }

    #[test]
    fn width_requires_snapshot() {
        assert!(Cli::try_parse_from(["vitrine", "--width", "100"]).is_err());
        assert!(Cli::try_parse_from(["vitrine", "--snapshot", "--width", "100"]).is_ok());
    }
}
