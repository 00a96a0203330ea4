use forge_core::IdentityRecord;

use serde::Serialize;

/// Result of loading the stored identity. Distinguishes "nothing stored"
/// from "stored but unreadable".
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadResult {
    pub record: Option<IdentityRecord>,
    /// Present if a value exists but could not be parsed
    pub corruption_error: Option<String>,
}

impl LoadResult {
    pub fn is_bound(&self) -> bool {
        self.record.is_some()
    }
}
