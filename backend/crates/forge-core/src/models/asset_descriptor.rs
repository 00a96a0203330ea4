use crate::LifecycleStatus;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of the published asset registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    #[serde(default, deserialize_with = "lenient_string")]
    pub asset_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub asset_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub asset_version: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub surface_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value_type: Option<String>,
    #[serde(default)]
    pub lifecycle_status: LifecycleStatus,
}

impl AssetDescriptor {
    /// Name shown on the card: `asset_name`, then `asset_id`, then `"asset"`.
    pub fn display_name(&self) -> &str {
        self.asset_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.asset_id.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("asset")
    }
}

/// Strings pass through; numbers and booleans are stringified; anything
/// else is treated as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}
