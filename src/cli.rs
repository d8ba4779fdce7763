//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::SortOption;
use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "shopfront",
    version,
    about = "Browse a remote product catalog from the terminal"
)]
pub struct Cli {
    /// Config file (default: ~/.config/shopfront/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Override the catalog API base URL
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Override the search debounce delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Override the default log level (RUST_LOG still wins)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Fetch the catalog once and print the filtered, sorted list
    List {
        /// Case-insensitive title search
        #[arg(long, default_value = "")]
        search: String,
        /// Exact category name
        #[arg(long, default_value = "")]
        category: String,
        /// default, price-asc or price-desc
        #[arg(long, default_value_t = SortOption::Default)]
        sort: SortOption,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the category names
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// Print one product
    Show {
        /// Product id
        id: String,
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Load the config file (explicit path or default) and apply overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(ms) = self.debounce_ms {
            config.ui.search_debounce_ms = ms;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
