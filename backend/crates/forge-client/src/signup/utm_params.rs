use serde::Serialize;
use url::Url;

/// Campaign attribution forwarded with a signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtmParams {
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub utm_content: String,
}

impl Default for UtmParams {
    fn default() -> Self {
        Self {
            utm_source: String::from("direct"),
            utm_medium: String::from("web"),
            utm_campaign: String::from("field-notes"),
            utm_content: String::from("forge"),
        }
    }
}

impl UtmParams {
    /// Read the four `utm_*` query parameters. The first occurrence of each
    /// wins; a missing or empty value keeps the default.
    pub fn from_page_url(page_url: Option<&Url>) -> Self {
        let defaults = Self::default();
        let Some(url) = page_url else {
            return defaults;
        };

        let param = |name: &str, fallback: String| {
            url.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
        };

        Self {
            utm_source: param("utm_source", defaults.utm_source),
            utm_medium: param("utm_medium", defaults.utm_medium),
            utm_campaign: param("utm_campaign", defaults.utm_campaign),
            utm_content: param("utm_content", defaults.utm_content),
        }
    }
}
