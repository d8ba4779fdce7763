use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;

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
    /// Uses `~/.config/shopfront/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("shopfront").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

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
    /// - The API base URL parses and uses http or https
    /// - Endpoint paths start with '/'
    /// - Timeouts and the tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api.base_url).map_err(|e| invalid(format!(
            "api.base_url '{}' is not a valid URL: {}",
            self.api.base_url, e
        )))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "api.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        for (name, path) in [
            ("api.products_path", &self.api.products_path),
            ("api.categories_path", &self.api.categories_path),
        ] {
            if !path.starts_with('/') {
                return Err(invalid(format!("{} must start with '/', got '{}'", name, path)));
            }
        }

        if self.api.timeout_seconds == 0 || self.api.connect_timeout_seconds == 0 {
            return Err(invalid("API timeouts must be greater than zero".to_string()));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(invalid("ui.tick_rate_ms must be greater than zero".to_string()));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
