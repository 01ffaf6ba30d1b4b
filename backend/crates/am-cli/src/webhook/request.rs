use crate::{AdditionalInfo, WorkflowCard};

use std::time::Duration;

use am_session::now_iso8601;
use serde_json::Value;

/// The shapes of `additionalInfo` the portal sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowRequest {
    /// Connectivity check from a card's test button
    TestPing { card_title: String },
    ChatMessage { text: String },
    Idea { text: String },
    /// Two-field extract request for the Economic assistant
    EconomicExtract { customer: String, period: String },
}

impl WorkflowRequest {
    pub fn test_ping(card: &WorkflowCard) -> Self {
        Self::TestPing {
            card_title: card.title.to_string(),
        }
    }

    pub fn additional_info(&self) -> AdditionalInfo {
        match self {
            Self::TestPing { card_title } => fields([
                ("testMode", Value::Bool(true)),
                (
                    "message",
                    Value::String(format!("Test webhook from {card_title}")),
                ),
                ("testTimestamp", Value::String(now_iso8601())),
            ]),
            Self::ChatMessage { text } => fields([
                ("message", Value::String(text.clone())),
                ("messageType", Value::String("chat".into())),
            ]),
            Self::Idea { text } => fields([
                ("ideaText", Value::String(text.clone())),
                ("submissionType", Value::String("idea".into())),
            ]),
            Self::EconomicExtract { customer, period } => fields([
                ("customer", Value::String(customer.clone())),
                ("period", Value::String(period.clone())),
                ("requestType", Value::String("economic_extract".into())),
            ]),
        }
    }

    /// How long the sender's status icon stays before reverting to idle.
    pub fn reset_delay(&self) -> Duration {
        match self {
            Self::TestPing { .. } => Duration::from_secs(3),
            Self::ChatMessage { .. } | Self::EconomicExtract { .. } => Duration::from_secs(5),
            Self::Idea { .. } => Duration::from_secs(8),
        }
    }
}

fn fields<const N: usize>(entries: [(&str, Value); N]) -> AdditionalInfo {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
