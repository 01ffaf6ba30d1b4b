use serde::{Serialize, Serializer};

/// Outcome of one dispatch. Never both a message and an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookResult {
    Success { message: Option<String> },
    Failure { error: String },
}

impl WebhookResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: Some(message.into()),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message } => message.as_deref(),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}

/// Wire shape: `{"success": bool, "message"?: string, "error"?: string}`.
impl Serialize for WebhookResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a> {
            success: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            message: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            error: Option<&'a str>,
        }

        Wire {
            success: self.is_success(),
            message: self.message(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}
