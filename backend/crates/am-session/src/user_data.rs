use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity of the current user.
///
/// Every field is optional so the same type doubles as a partial update:
/// `None` means "leave as is" when merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// ISO-8601, stamped at login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl UserData {
    /// Partial identity carrying only a display name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            user_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Pick known fields out of a stored object.
    ///
    /// Strings are taken as is, numbers and booleans are stringified, and
    /// anything else leaves the field unset.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let field = |name: &str| match fields.get(name)? {
            Value::String(value) => Some(value.clone()),
            value @ (Value::Number(_) | Value::Bool(_)) => Some(value.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        };

        Self {
            user_id: field("userId"),
            user_email: field("userEmail"),
            user_name: field("userName"),
            login_timestamp: field("loginTimestamp"),
            session_id: field("sessionId"),
            user_agent: field("userAgent"),
            ip_address: field("ipAddress"),
        }
    }

    /// Shallow merge: fields present in `patch` win, absent ones are kept.
    pub fn merge(&mut self, patch: &UserData) {
        fn overlay(target: &mut Option<String>, value: &Option<String>) {
            if value.is_some() {
                target.clone_from(value);
            }
        }

        overlay(&mut self.user_id, &patch.user_id);
        overlay(&mut self.user_email, &patch.user_email);
        overlay(&mut self.user_name, &patch.user_name);
        overlay(&mut self.login_timestamp, &patch.login_timestamp);
        overlay(&mut self.session_id, &patch.session_id);
        overlay(&mut self.user_agent, &patch.user_agent);
        overlay(&mut self.ip_address, &patch.ip_address);
    }

    /// Copy of `self` with `patch` merged on top.
    pub fn merged(&self, patch: &UserData) -> Self {
        let mut merged = self.clone();
        merged.merge(patch);
        merged
    }
}
