#![allow(dead_code)]

//! Shared fixtures for forge-client integration tests

use forge_client::{IdentityForm, IdentityStore, MemoryStorage};
use forge_config::PageSettings;

use std::sync::Arc;

pub const RAW_TOKEN: &str = "correct horse battery staple";

/// Settings with every optional endpoint absent.
pub fn local_settings() -> PageSettings {
    PageSettings::default()
}

pub fn settings_with_identity(url: String) -> PageSettings {
    PageSettings {
        identity_post_url: Some(url),
        ..PageSettings::default()
    }
}

pub fn memory_store() -> (Arc<MemoryStorage>, IdentityStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = IdentityStore::new(storage.clone());
    (storage, store)
}

pub fn form(consent: bool) -> IdentityForm {
    IdentityForm {
        email: "  A@B.com ".to_string(),
        handle: "node".to_string(),
        token: RAW_TOKEN.to_string(),
        consent,
    }
}
