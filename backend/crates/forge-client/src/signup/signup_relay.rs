use crate::signup::{SignupOutcome, UtmParams};
use crate::{ClientError, ClientResult, resolve_url};

use forge_config::PageSettings;
use log::{info, warn};
use serde::Serialize;
use url::Url;

/// Tag attached to every subscriber created from this page.
pub const SIGNUP_TAG: &str = "displacement-atlas-sequence";

#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    api_key: Option<&'a str>,
    email: &'a str,
    tags: [&'a str; 1],
    fields: UtmParams,
}

/// Forwards the email signup form to a mailing-list API.
pub struct SignupRelay {
    endpoint: Option<String>,
    api_key: Option<String>,
    page_url: Option<Url>,
    http: reqwest::Client,
}

impl SignupRelay {
    pub fn new(settings: &PageSettings, page_url: Option<Url>, http: reqwest::Client) -> Self {
        Self {
            endpoint: settings.email_signup_url.clone(),
            api_key: settings.email_api_key.clone(),
            page_url,
            http,
        }
    }

    pub async fn submit(&self, email: &str) -> SignupOutcome {
        let email = email.trim();
        if email.is_empty() {
            return SignupOutcome::Ignored;
        }

        let Some(ref endpoint) = self.endpoint else {
            return SignupOutcome::NotConfigured;
        };

        let request = SignupRequest {
            api_key: self.api_key.as_deref(),
            email,
            tags: [SIGNUP_TAG],
            fields: UtmParams::from_page_url(self.page_url.as_ref()),
        };

        match self.post(endpoint, &request).await {
            Ok(()) => {
                info!("Email signup accepted");
                SignupOutcome::Subscribed
            }
            Err(e) => {
                warn!("Email signup error: {e}");
                SignupOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn post(&self, endpoint: &str, request: &SignupRequest<'_>) -> ClientResult<()> {
        let url = resolve_url(self.page_url.as_ref(), endpoint)?;
        let response = self.http.post(url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::status(response.status().as_u16()));
        }

        Ok(())
    }
}
