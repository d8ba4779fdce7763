//! Configuration: TOML file under the user config dir, with CLI overrides
//! applied by the binary.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig};
