use crate::{KeyValueStorage, StorageError, StorageResult, storage::validate_key};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-process storage. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `set`/`remove` fail, like a full or locked-down browser store.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::unavailable("storage quota exceeded"));
        }
        Ok(())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        let entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::unavailable("storage lock poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.check_writable()?;
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::unavailable("storage lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.check_writable()?;
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StorageError::unavailable("storage lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}
