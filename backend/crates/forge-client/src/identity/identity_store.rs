use crate::identity::LoadResult;
use crate::storage::{KeyValueStorage, StorageResult};

use std::sync::Arc;

use forge_core::IdentityRecord;
use log::{info, warn};

/// Storage key holding the serialized identity record.
pub const IDENTITY_STORAGE_KEY: &str = "node_null_identity_v1";

/// Reads, writes and erases the locally bound identity.
#[derive(Clone)]
pub struct IdentityStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl IdentityStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// An unparseable stored value is reported through
    /// `corruption_error` and otherwise treated as absent.
    pub fn load(&self) -> StorageResult<LoadResult> {
        let Some(raw) = self.storage.get_item(IDENTITY_STORAGE_KEY)? else {
            return Ok(LoadResult::default());
        };

        match serde_json::from_str::<IdentityRecord>(&raw) {
            Ok(record) => Ok(LoadResult {
                record: Some(record),
                corruption_error: None,
            }),
            Err(e) => {
                warn!("Stored identity is unreadable, treating as unbound: {e}");
                Ok(LoadResult {
                    record: None,
                    corruption_error: Some(e.to_string()),
                })
            }
        }
    }

    /// Overwrites any previous record.
    pub fn save(&self, record: &IdentityRecord) -> StorageResult<()> {
        let json = serde_json::to_string(record)?;
        self.storage.set_item(IDENTITY_STORAGE_KEY, &json)?;
        info!("Identity bound locally");
        Ok(())
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.storage.remove_item(IDENTITY_STORAGE_KEY)?;
        info!("Local identity cleared");
        Ok(())
    }
}
