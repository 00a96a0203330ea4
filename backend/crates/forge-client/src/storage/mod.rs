pub(crate) mod error;
pub(crate) mod file_storage;
pub(crate) mod memory_storage;

pub use error::{Result as StorageResult, StorageError};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// String key-value storage with the semantics of browser local storage:
/// synchronous, last writer wins, no cross-process coordination.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}
