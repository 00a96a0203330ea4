use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;
use url::Url;

/// Server-side identity relay settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Downstream sink for identity events. `None` disables capture.
    pub webhook_url: Option<String>,
}

impl IdentityConfig {
    /// The sink URL, treating an empty value as unset.
    pub fn sink_url(&self) -> Option<&str> {
        self.webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn is_enabled(&self) -> bool {
        self.sink_url().is_some()
    }

    /// Host part of the sink URL, safe to log.
    pub fn sink_host(&self) -> Option<String> {
        self.sink_url()
            .and_then(|raw| Url::parse(raw).ok())
            .and_then(|url| url.host_str().map(String::from))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(raw) = self.sink_url() else {
            return Ok(());
        };

        let url = Url::parse(raw).map_err(|e| {
            ConfigError::identity(format!("identity.webhook_url is not a valid URL: {e}"))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::identity(format!(
                "identity.webhook_url must use http or https, got {}",
                url.scheme()
            )));
        }

        Ok(())
    }
}
