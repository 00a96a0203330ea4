//! Explicit page wiring.
//!
//! `ForgePage::initialize` builds every component once from a resolved
//! [`PageSettings`] and exposes the page's handlers as methods. There is no
//! guard against initialising twice or against overlapping submissions.

use crate::assets::{AssetLoader, RenderedAssets};
use crate::identity::{BindOutcome, IdentityForm, IdentityRelay, IdentityStore};
use crate::signup::{SignupOutcome, SignupRelay};
use crate::storage::KeyValueStorage;
use crate::{ClientResult, StatusLine};

use std::sync::Arc;

use forge_config::PageSettings;
use log::warn;
use url::Url;

pub struct ForgePage {
    settings: PageSettings,
    store: IdentityStore,
    assets: AssetLoader,
    identity: IdentityRelay,
    signup: SignupRelay,
    access_revealed: bool,
}

impl ForgePage {
    pub fn initialize(
        settings: PageSettings,
        page_url: Option<Url>,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Self {
        let http = reqwest::Client::new();
        let store = IdentityStore::new(storage);

        Self {
            assets: AssetLoader::new(&settings, page_url.clone(), http.clone()),
            identity: IdentityRelay::new(&settings, page_url.clone(), store.clone(), http.clone()),
            signup: SignupRelay::new(&settings, page_url, http),
            store,
            settings,
            access_revealed: false,
        }
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// "Enter" button: unhide the access panel.
    pub fn reveal_access(&mut self) {
        self.access_revealed = true;
    }

    pub fn is_access_revealed(&self) -> bool {
        self.access_revealed
    }

    pub async fn load_assets(&self) -> RenderedAssets {
        self.assets.load().await
    }

    /// Status shown when the access panel is first wired. A storage failure
    /// reads as unbound.
    pub fn identity_status(&self) -> StatusLine {
        match self.store.load() {
            Ok(loaded) if loaded.is_bound() => StatusLine::info("identity already bound locally"),
            Ok(_) => StatusLine::info("identity not bound"),
            Err(e) => {
                warn!("Could not read local identity: {e}");
                StatusLine::info("identity not bound")
            }
        }
    }

    pub async fn submit_identity(&self, form: &IdentityForm) -> ClientResult<BindOutcome> {
        self.identity.submit(form).await
    }

    pub fn clear_identity(&self) -> ClientResult<StatusLine> {
        self.store.clear()?;
        Ok(StatusLine::info("cleared"))
    }

    pub async fn submit_signup(&self, email: &str) -> SignupOutcome {
        self.signup.submit(email).await
    }
}
