use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Publication state of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    /// Published; always listed
    Active,
    /// Unpublished; listed only in preview mode
    Draft,
    /// Awaiting publication; listed only in preview mode
    Pending,
    /// Missing or unrecognised status
    #[default]
    Unknown,
}

impl LifecycleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Unknown => "unknown",
        }
    }

    /// Unrecognised labels map to `Unknown` rather than failing.
    pub fn from_label(label: &str) -> Self {
        match label {
            "active" => Self::Active,
            "draft" => Self::Draft,
            "pending" => Self::Pending,
            _ => Self::Unknown,
        }
    }

    /// Whether an asset in this state is listed. Drafts and pending
    /// assets need the preview flag; unknown never shows.
    pub fn is_visible(&self, show_drafts: bool) -> bool {
        match self {
            Self::Active => true,
            Self::Draft | Self::Pending => show_drafts,
            Self::Unknown => false,
        }
    }
}

impl<'de> Deserialize<'de> for LifecycleStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Registry data is externally owned; a non-string status is unknown, not an error
        match Value::deserialize(deserializer)? {
            Value::String(label) => Ok(Self::from_label(&label)),
            _ => Ok(Self::Unknown),
        }
    }
}

impl std::fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
