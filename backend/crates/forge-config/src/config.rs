use crate::{
    CONFIG_DIR_VAR, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    IDENTITY_WEBHOOK_URL_VAR, IdentityConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub identity: IdentityConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Resolve the config directory (FORGE_CONFIG_DIR, else ./.forge/)
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply FORGE_* and IDENTITY_WEBHOOK_URL environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FORGE_CONFIG_DIR env var > ./.forge/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_VAR) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.identity.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.contains("..") || Path::new(file).is_absolute())
        {
            return Err(ConfigError::logging(
                "logging.file must be a plain file name",
            ));
        }

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary. Only the sink host is printed, never the full URL.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (cors: {})",
            self.server.host,
            self.server.port,
            if self.server.cors_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );

        match self.identity.sink_host() {
            Some(host) => info!("  identity capture: enabled (sink host {})", host),
            None if self.identity.is_enabled() => info!("  identity capture: enabled"),
            None => info!("  identity capture: disabled ({} not set)", IDENTITY_WEBHOOK_URL_VAR),
        }

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FORGE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FORGE_SERVER_PORT", &mut self.server.port);
        Self::apply_env_bool("FORGE_CORS_ENABLED", &mut self.server.cors_enabled);

        // Identity
        Self::apply_env_option_string(IDENTITY_WEBHOOK_URL_VAR, &mut self.identity.webhook_url);

        // Logging
        Self::apply_env_parse("FORGE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FORGE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FORGE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// An empty value clears the option.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = if val.trim().is_empty() { None } else { Some(val) };
        }
    }
}
