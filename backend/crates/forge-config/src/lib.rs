mod config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;
mod page_settings;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use page_settings::{InjectedSettings, PageSettings};
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_CONFIG_DIRECTORY: &str = ".forge";
const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable naming the downstream identity sink.
pub const IDENTITY_WEBHOOK_URL_VAR: &str = "IDENTITY_WEBHOOK_URL";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_VAR: &str = "FORGE_CONFIG_DIR";

const DEFAULT_ASSETS_URL: &str = "../monetization/assets/assets.json";
const ASSETS_URL_QUERY_PARAM: &str = "assets_url";
