use crate::storage::{KeyValueStorage, StorageError, StorageResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

/// One `<key>.json` file per key inside a directory.
///
/// Writes go through a temp file, fsync and rename so a crash mid-write
/// never leaves a truncated value behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

        if !valid {
            return Err(StorageError::invalid_key(key));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.key_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::read(path, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.key_path(key)?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file =
                fs::File::create(&temp_path).map_err(|e| StorageError::write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| StorageError::write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::write(final_path.clone(), e)
        })?;

        debug!("Stored {key} at {}", final_path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let path = self.key_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::remove(path, e)),
        }
    }
}
