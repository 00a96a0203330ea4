use crate::{AssetDescriptor, CoreError, Result as CoreErrorResult};

use serde::Deserialize;
use serde_json::Value;

/// Parsed asset registry document (`{ "assets": [...] }`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRegistry {
    pub assets: Vec<AssetDescriptor>,
}

impl AssetRegistry {
    /// Parse a registry document. A missing or non-array `assets` field
    /// yields an empty registry and entries that are not objects are skipped.
    /// Malformed JSON is an error.
    pub fn from_slice(bytes: &[u8]) -> CoreErrorResult<Self> {
        let document: Value = serde_json::from_slice(bytes).map_err(CoreError::asset_registry)?;

        let assets = match document.get("assets") {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter(|entry| entry.is_object())
                .map(|entry| AssetDescriptor::deserialize(entry).map_err(CoreError::asset_registry))
                .collect::<CoreErrorResult<Vec<_>>>()?,
            _ => Vec::new(),
        };

        Ok(Self { assets })
    }

    /// Entries that should be listed, in registry order.
    pub fn visible(&self, show_drafts: bool) -> Vec<&AssetDescriptor> {
        self.assets
            .iter()
            .filter(|asset| asset.lifecycle_status.is_visible(show_drafts))
            .collect()
    }
}
