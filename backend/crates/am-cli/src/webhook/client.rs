use crate::webhook::{
    AdditionalInfo, DispatchError, DispatchResult, WebhookPayload, WebhookResult, WorkflowRequest,
};
use crate::{WorkflowCard, WorkflowType};

use am_session::{UserData, UserDataStorage, generate_session_id, now_iso8601};
use log::{debug, error, info, warn};
use reqwest::{Client as ReqwestClient, StatusCode, Url};
use serde_json::Value;

pub const SUCCESS_MESSAGE: &str = "Webhook sent successfully";

/// Sends workflow notifications to the configured automation webhook.
///
/// Each call is one POST with no retry, timeout or queueing beyond the
/// transport defaults. Calls are independent of each other.
pub struct WebhookClient {
    pub webhook_url: Option<String>,
    pub user_agent: String,
    storage: UserDataStorage,
    client: ReqwestClient,
}

impl WebhookClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `webhook_url` - Destination URL; blank counts as unset
    /// * `user_agent` - Reported in each payload's `userData`
    /// * `storage` - Durable identity store read on every dispatch
    pub fn new(webhook_url: Option<&str>, user_agent: &str, storage: UserDataStorage) -> Self {
        let webhook_url = webhook_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from);

        if webhook_url.is_none() {
            warn!("Webhook URL is not set; dispatches will fail until it is configured");
        }

        Self {
            webhook_url,
            user_agent: user_agent.to_string(),
            storage,
            client: ReqwestClient::new(),
        }
    }

    /// Build from loaded configuration.
    pub fn from_config(config: &am_config::Config, storage: UserDataStorage) -> Self {
        Self::new(
            config.webhook.url().as_deref(),
            &config.app.user_agent,
            storage,
        )
    }

    /// Send one notification and report the outcome.
    ///
    /// Never returns success unless a URL is configured and the endpoint
    /// answered with a 2xx status.
    pub async fn send_webhook(
        &self,
        card_name: &str,
        workflow_type: WorkflowType,
        additional_info: Option<AdditionalInfo>,
    ) -> WebhookResult {
        match self
            .dispatch(card_name, workflow_type, additional_info)
            .await
        {
            Ok(()) => {
                info!("Webhook sent: {card_name} ({workflow_type})");
                WebhookResult::success(SUCCESS_MESSAGE)
            }
            Err(e) => {
                error!("Error sending webhook: {e}");
                WebhookResult::failure(e.user_message())
            }
        }
    }

    /// Send a catalog request on behalf of `card`.
    pub async fn send(&self, card: &WorkflowCard, request: &WorkflowRequest) -> WebhookResult {
        self.send_webhook(
            card.title,
            card.workflow_type,
            Some(request.additional_info()),
        )
        .await
    }

    async fn dispatch(
        &self,
        card_name: &str,
        workflow_type: WorkflowType,
        additional_info: Option<AdditionalInfo>,
    ) -> DispatchResult<()> {
        let Some(ref url) = self.webhook_url else {
            return Err(DispatchError::not_configured());
        };
        let endpoint = Url::parse(url)
            .map_err(|e| DispatchError::invalid_url(url.as_str(), e.to_string()))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(DispatchError::invalid_url(
                url.as_str(),
                format!("unsupported scheme {}", endpoint.scheme()),
            ));
        }

        let payload = WebhookPayload {
            card_name: card_name.to_string(),
            user_data: self.collect_user_data(),
            additional_info,
            timestamp: now_iso8601(),
            workflow_type,
        };

        let response = self.client.post(endpoint).json(&payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            if status == StatusCode::NOT_FOUND {
                return Err(DispatchError::not_found(url.as_str()));
            }
            return Err(DispatchError::status(status.as_u16()));
        }

        // 2xx with an empty or non-JSON body still counts as delivered
        match response.json::<Value>().await {
            Ok(body) => debug!("Webhook response: {body}"),
            Err(e) => debug!("Webhook response is not JSON, treating as success: {e}"),
        }

        Ok(())
    }

    /// Identity for the payload, read fresh from durable storage.
    ///
    /// `loginTimestamp` is the send time and a missing session id is
    /// synthesized; neither is written back.
    pub(crate) fn collect_user_data(&self) -> UserData {
        let mut user_data = UserData {
            login_timestamp: Some(now_iso8601()),
            user_agent: Some(self.user_agent.clone()),
            ..UserData::default()
        };

        if let Some(stored) = self.storage.read() {
            user_data.user_id = stored.user_id;
            user_data.user_email = stored.user_email;
            user_data.user_name = stored.user_name;
            user_data.session_id = stored.session_id;
        }

        if user_data.session_id.is_none() {
            user_data.session_id = Some(generate_session_id());
        }

        user_data
    }
}
