use crate::assets::{RenderedAssets, render_assets};
use crate::{ClientError, ClientResult, resolve_url};

use forge_config::PageSettings;
use forge_core::AssetRegistry;
use log::{debug, warn};
use reqwest::header::CACHE_CONTROL;
use url::Url;

/// Fetches the asset registry and turns it into markup.
pub struct AssetLoader {
    assets_url: String,
    show_drafts: bool,
    page_url: Option<Url>,
    http: reqwest::Client,
}

impl AssetLoader {
    pub fn new(settings: &PageSettings, page_url: Option<Url>, http: reqwest::Client) -> Self {
        Self {
            assets_url: settings.assets_url.clone(),
            show_drafts: settings.show_draft_assets,
            page_url,
            http,
        }
    }

    /// Fetch the registry, bypassing caches. Non-2xx and malformed bodies
    /// are errors.
    pub async fn fetch(&self) -> ClientResult<AssetRegistry> {
        let url = resolve_url(self.page_url.as_ref(), &self.assets_url)?;
        debug!("Fetching asset registry from {url}");

        let response = self
            .http
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        Ok(AssetRegistry::from_slice(&body)?)
    }

    /// Fetch and render. Never fails: fetch errors become the error placeholder.
    pub async fn load(&self) -> RenderedAssets {
        let result = self.fetch().await;
        if let Err(ref e) = result {
            warn!("Failed to load assets: {e}");
        }
        render_assets(&result, self.show_drafts)
    }
}
