#![allow(dead_code)]

use am_session::{FileStorage, MemoryStorage, USER_DATA_KEY, UserData, UserDataStorage};

use std::sync::Arc;

use tempfile::TempDir;

/// File-backed user-data storage in a fresh temp directory.
pub fn create_file_storage() -> (TempDir, Arc<FileStorage>, UserDataStorage) {
    let temp = TempDir::new().unwrap();
    let backend = Arc::new(FileStorage::new(temp.path().join("storage")));
    let storage = UserDataStorage::new(backend.clone());
    (temp, backend, storage)
}

/// Memory-backed user-data storage, with the backend kept for inspection.
pub fn create_memory_storage() -> (Arc<MemoryStorage>, UserDataStorage) {
    let backend = Arc::new(MemoryStorage::new());
    let storage = UserDataStorage::new(backend.clone());
    (backend, storage)
}

/// Path of the identity blob inside a file storage.
pub fn user_data_file(backend: &FileStorage) -> std::path::PathBuf {
    backend.dir().join(format!("{USER_DATA_KEY}.json"))
}

/// A partial identity with id, name and email set.
pub fn create_test_identity(name: &str) -> UserData {
    UserData {
        user_id: Some(format!("{name}-id")),
        user_name: Some(name.to_string()),
        user_email: Some(format!("{name}@example.com")),
        ..UserData::default()
    }
}
