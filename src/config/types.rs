use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote catalog API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host (e.g., "https://fakestoreapi.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the products endpoint, appended to `base_url`.
    #[serde(default = "default_products_path")]
    pub products_path: String,
    /// Path of the categories endpoint, appended to `base_url`.
    #[serde(default = "default_categories_path")]
    pub categories_path: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Quiet period before typed search text reaches the filters (default: 300).
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file used by the terminal UI. Defaults to the user cache dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://fakestoreapi.com".to_string()
}

fn default_products_path() -> String {
    "/products".to_string()
}

fn default_categories_path() -> String {
    "/products/categories".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ApiConfig {
    pub fn products_url(&self) -> String {
        join_url(&self.base_url, &self.products_path)
    }

    pub fn categories_url(&self) -> String {
        join_url(&self.base_url, &self.categories_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

impl LoggingConfig {
    /// Configured file, or `<cache dir>/shopfront/shopfront.log`.
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("shopfront")
                .join("shopfront.log")
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            products_path: default_products_path(),
            categories_path: default_categories_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
            tick_rate_ms: default_tick_rate_ms(),
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
