//! Local user identity for AutoMate.
//!
//! Holds the single current [`UserData`] for this installation, persists it
//! through a [`KeyValueStorage`] backend, and exposes the login lifecycle
//! through [`SessionStore`].

pub mod credentials;
pub mod error;
pub mod session_id;
pub mod session_snapshot;
pub mod session_store;
pub mod storage;
pub mod timestamp;
pub mod user_data;
pub mod user_data_storage;


pub use credentials::{DEMO_HINT, LoginMode, authenticate};
pub use error::{Result as StorageResult, StorageError};
pub use session_id::{generate_session_id, is_session_id};
pub use session_snapshot::SessionSnapshot;
pub use session_store::SessionStore;
pub use storage::{KeyValueStorage, file_storage::FileStorage, memory_storage::MemoryStorage};
pub use timestamp::now_iso8601;
pub use user_data::UserData;
pub use user_data_storage::{USER_DATA_KEY, UserDataStorage};
