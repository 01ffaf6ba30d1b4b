use crate::UserData;

use serde::Serialize;

/// Point-in-time view of the session, as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub is_logged_in: bool,
    pub user_data: Option<UserData>,
}
