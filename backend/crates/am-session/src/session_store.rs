use crate::{SessionSnapshot, UserData, UserDataStorage, generate_session_id, now_iso8601};

use log::info;

/// The single current identity, mirrored to durable storage.
///
/// Constructed explicitly and passed to whoever needs it. Persistence is
/// best effort: a failed write still leaves the in-memory state updated.
#[derive(Debug)]
pub struct SessionStore {
    storage: UserDataStorage,
    user_data: Option<UserData>,
}

impl SessionStore {
    /// Restore a previously persisted identity, if any.
    ///
    /// Absent or malformed data starts the store logged out.
    pub fn initialize(storage: UserDataStorage) -> Self {
        let user_data = storage.read();

        match user_data {
            Some(ref user) => info!(
                "Restored session {}",
                user.session_id.as_deref().unwrap_or("(none)")
            ),
            None => info!("No stored session, starting logged out"),
        }

        Self { storage, user_data }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_data.is_some()
    }

    pub fn user_data(&self) -> Option<&UserData> {
        self.user_data.as_ref()
    }

    pub fn storage(&self) -> &UserDataStorage {
        &self.storage
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            is_logged_in: self.is_logged_in(),
            user_data: self.user_data.clone(),
        }
    }

    /// Start a new session.
    ///
    /// `loginTimestamp` and `sessionId` are always freshly generated, even
    /// when the caller supplied them.
    pub fn login(&mut self, identity: UserData) -> &UserData {
        let user = UserData {
            login_timestamp: Some(now_iso8601()),
            session_id: Some(generate_session_id()),
            ..identity
        };

        info!(
            "Login: {} ({})",
            user.user_name.as_deref().unwrap_or("anonymous"),
            user.session_id.as_deref().unwrap_or_default()
        );

        self.storage.store(&user);
        self.user_data.insert(user)
    }

    /// End the session and purge the stored copy. Safe to call repeatedly.
    pub fn logout(&mut self) {
        if let Some(user) = self.user_data.take() {
            info!(
                "Logout: {}",
                user.session_id.as_deref().unwrap_or("(no session)")
            );
        }
        self.storage.clear();
    }

    /// Merge `patch` into the current identity. No-op when logged out.
    pub fn update_user_data(&mut self, patch: &UserData) {
        let Some(ref current) = self.user_data else {
            return;
        };

        let user = current.merged(patch);
        self.storage.store(&user);
        self.user_data = Some(user);
    }
}
