use crate::{KeyValueStorage, StorageError, StorageResult, UserData, now_iso8601};

use std::sync::Arc;

use log::{debug, error, warn};
use serde_json::{Map, Value};

/// Fixed storage key of the persisted identity blob.
pub const USER_DATA_KEY: &str = "userData";

const LAST_UPDATED_FIELD: &str = "lastUpdated";

/// Reads and writes the identity blob under [`USER_DATA_KEY`].
///
/// Writes merge into whatever object is already stored, so fields this
/// version doesn't know about survive. Write failures are logged and
/// swallowed.
#[derive(Clone)]
pub struct UserDataStorage {
    backend: Arc<dyn KeyValueStorage>,
}

impl UserDataStorage {
    pub fn new(backend: Arc<dyn KeyValueStorage>) -> Self {
        Self { backend }
    }

    /// Merge `patch` into the stored object and stamp `lastUpdated`.
    pub fn store(&self, patch: &UserData) {
        if let Err(e) = self.try_store(patch) {
            log_failure("storing", &e);
        }
    }

    fn try_store(&self, patch: &UserData) -> StorageResult<()> {
        let mut current = self.read_raw().unwrap_or_default();

        if let Value::Object(fields) = serde_json::to_value(patch)? {
            current.extend(fields);
        }
        current.insert(
            LAST_UPDATED_FIELD.to_string(),
            Value::String(now_iso8601()),
        );

        let json = serde_json::to_string(&Value::Object(current))?;
        self.backend.set(USER_DATA_KEY, &json)?;

        debug!("Stored user data under '{USER_DATA_KEY}'");
        Ok(())
    }

    /// Remove the stored blob entirely.
    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(USER_DATA_KEY) {
            log_failure("clearing", &e);
        }
    }

    /// Stored identity, or None when absent, malformed or not an object.
    ///
    /// A field of the wrong type is dropped on its own; the rest of the
    /// object is still used.
    pub fn read(&self) -> Option<UserData> {
        self.read_raw().map(|raw| UserData::from_fields(&raw))
    }

    /// Stored object including fields outside [`UserData`], e.g. `lastUpdated`.
    pub fn read_raw(&self) -> Option<Map<String, Value>> {
        let contents = match self.backend.get(USER_DATA_KEY) {
            Ok(Some(contents)) => contents,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read user data: {e}");
                return None;
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(fields)) => Some(fields),
            Ok(other) => {
                warn!("Stored user data is not a JSON object: {other}");
                None
            }
            Err(e) => {
                warn!("Stored user data is malformed: {e}");
                None
            }
        }
    }
}

fn log_failure(action: &str, e: &StorageError) {
    if e.is_transient() {
        warn!(
            "Error {action} user data, next write may succeed: {e} ({})",
            e.recovery_hint()
        );
    } else {
        error!("Error {action} user data: {e} ({})", e.recovery_hint());
    }
}

impl std::fmt::Debug for UserDataStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserDataStorage")
            .field("key", &USER_DATA_KEY)
            .finish_non_exhaustive()
    }
}
