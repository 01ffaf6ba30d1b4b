pub mod file_storage;
pub mod memory_storage;

use crate::{StorageError, StorageResult};

/// String-keyed, string-valued durable storage scoped to one installation.
pub trait KeyValueStorage: Send + Sync {
    /// Returns `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Keys become file names, so keep them to a safe alphabet.
#[track_caller]
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StorageError::invalid_key(key))
    }
}
