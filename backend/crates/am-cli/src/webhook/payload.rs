use crate::WorkflowType;

use am_session::UserData;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Workflow-specific fields. Opaque to the dispatch client.
pub type AdditionalInfo = Map<String, Value>;

/// Body of one webhook POST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub card_name: String,
    pub user_data: UserData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AdditionalInfo>,
    /// ISO-8601 send time
    pub timestamp: String,
    pub workflow_type: WorkflowType,
}
