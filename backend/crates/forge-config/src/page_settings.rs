//! Client page settings.
//!
//! Precedence, highest first: the `assets_url` query parameter of the page
//! URL (assets only), the injected global settings object, built-in defaults.

use crate::{ASSETS_URL_QUERY_PARAM, ConfigError, ConfigErrorResult, DEFAULT_ASSETS_URL};

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use url::Url;

/// The page-level settings object a deployment injects, keyed the way the
/// page's `config.js` writes it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InjectedSettings {
    #[serde(rename = "ASSETS_URL", default)]
    pub assets_url: Option<String>,
    #[serde(rename = "IDENTITY_POST_URL", default)]
    pub identity_post_url: Option<String>,
    #[serde(rename = "SHOW_DRAFT_ASSETS", default, deserialize_with = "truthy")]
    pub show_draft_assets: bool,
    #[serde(rename = "EMAIL_SIGNUP_URL", default)]
    pub email_signup_url: Option<String>,
    #[serde(rename = "EMAIL_API_KEY", default)]
    pub email_api_key: Option<String>,
}

impl InjectedSettings {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the settings object from a JSON file.
    pub fn load(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_json_str(&contents).map_err(|e| ConfigError::Settings {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Resolved settings handed to each page component at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    pub assets_url: String,
    pub identity_post_url: Option<String>,
    pub show_draft_assets: bool,
    pub email_signup_url: Option<String>,
    pub email_api_key: Option<String>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self::resolve(None, &InjectedSettings::default())
    }
}

impl PageSettings {
    pub fn resolve(page_url: Option<&Url>, injected: &InjectedSettings) -> Self {
        let assets_override = page_url.and_then(|url| {
            url.query_pairs()
                .find(|(key, _)| key == ASSETS_URL_QUERY_PARAM)
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
        });

        let assets_url = assets_override
            .or_else(|| present(&injected.assets_url))
            .unwrap_or_else(|| String::from(DEFAULT_ASSETS_URL));

        Self {
            assets_url,
            identity_post_url: present(&injected.identity_post_url),
            show_draft_assets: injected.show_draft_assets,
            email_signup_url: present(&injected.email_signup_url),
            email_api_key: present(&injected.email_api_key),
        }
    }
}

fn present(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(String::from)
}

/// Accepts what a page script would treat as truthy: `true`, non-zero
/// numbers and non-empty strings.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
        Value::Null => false,
    })
}
