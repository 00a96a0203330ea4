use crate::identity::{BindOutcome, IdentityForm, IdentityStore};
use crate::{ClientError, ClientResult, resolve_url};

use forge_config::PageSettings;
use forge_core::{IdentitySubmission, format_utc};
use log::{info, warn};
use url::Url;

/// Client half of identity capture: persist locally, then optionally
/// relay a redacted copy to the configured endpoint.
pub struct IdentityRelay {
    store: IdentityStore,
    endpoint: Option<String>,
    page_url: Option<Url>,
    http: reqwest::Client,
}

impl IdentityRelay {
    pub fn new(
        settings: &PageSettings,
        page_url: Option<Url>,
        store: IdentityStore,
        http: reqwest::Client,
    ) -> Self {
        Self {
            store,
            endpoint: settings.identity_post_url.clone(),
            page_url,
            http,
        }
    }

    /// Handle one form submission.
    ///
    /// The record is written to storage before anything else and is never
    /// rolled back. `Err` is returned only when that local write fails;
    /// every network outcome is reported through [`BindOutcome`].
    pub async fn submit(&self, form: &IdentityForm) -> ClientResult<BindOutcome> {
        let record = form.record();
        self.store.save(&record)?;

        let Some(ref endpoint) = self.endpoint else {
            return Ok(BindOutcome::BoundLocally);
        };

        if !form.consent {
            info!("Identity relay skipped: consent not given");
            return Ok(BindOutcome::ConsentRequired);
        }

        let submission =
            IdentitySubmission::new(record.redacted(), format_utc(chrono::Utc::now()));

        match self.post(endpoint, &submission).await {
            Ok(()) => {
                info!("Identity relayed to endpoint");
                Ok(BindOutcome::BoundAndPosted)
            }
            Err(e) => {
                warn!("Identity relay failed: {e}");
                Ok(BindOutcome::PostFailed {
                    reason: e.to_string(),
                })
            }
        }
    }

    async fn post(&self, endpoint: &str, submission: &IdentitySubmission) -> ClientResult<()> {
        let url = resolve_url(self.page_url.as_ref(), endpoint)?;
        let response = self.http.post(url).json(submission).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::status(response.status().as_u16()));
        }

        Ok(())
    }
}
