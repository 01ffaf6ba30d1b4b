//! Integration tests for the webhook client using wiremock mock server

use am_cli::{SUCCESS_MESSAGE, WebhookClient, WebhookPayload, WorkflowRequest, WorkflowType, find_card};
use am_session::{MemoryStorage, SessionStore, UserData, UserDataStorage, is_session_id};

use std::sync::Arc;

use googletest::prelude::*;
use serde_json::{Map, Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

const HOOK_PATH: &str = "/webhook/automate";

fn memory_storage() -> UserDataStorage {
    UserDataStorage::new(Arc::new(MemoryStorage::new()))
}

fn hook_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), HOOK_PATH)
}

fn info(entries: &[(&str, &str)]) -> Option<Map<String, Value>> {
    Some(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect(),
    )
}

#[tokio::test]
async fn test_no_url_fails_without_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = WebhookClient::new(None, "ua", memory_storage());
    let result = client
        .send_webhook("Email Assistent", WorkflowType::Email, None)
        .await;

    assert!(!result.is_success());
    assert_that!(
        result.error().unwrap(),
        contains_substring("No webhook URL configured")
    );
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_200_empty_body_is_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = WebhookClient::new(Some(&hook_url(&mock_server)), "ua", memory_storage());
    let result = client
        .send_webhook("Email Assistent", WorkflowType::Email, None)
        .await;

    assert!(result.is_success());
    assert_eq!(result.message(), Some(SUCCESS_MESSAGE));
}

#[tokio::test]
async fn test_200_non_json_body_is_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("Workflow was started"))
        .mount(&mock_server)
        .await;

    let client = WebhookClient::new(Some(&hook_url(&mock_server)), "ua", memory_storage());
    let result = client
        .send_webhook("Idé kassen", WorkflowType::IdeaBox, None)
        .await;

    assert!(result.is_success());
}

#[tokio::test]
async fn test_201_json_body_is_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "received": true })))
        .mount(&mock_server)
        .await;

    let client = WebhookClient::new(Some(&hook_url(&mock_server)), "ua", memory_storage());
    let result = client
        .send_webhook("Economic Assistent", WorkflowType::Economics, None)
        .await;

    assert!(result.is_success());
}

#[tokio::test]
async fn test_404_message_contains_url() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let url = hook_url(&mock_server);
    let client = WebhookClient::new(Some(&url), "ua", memory_storage());
    let result = client
        .send_webhook("Email Assistent", WorkflowType::Email, None)
        .await;

    assert!(!result.is_success());
    let error = result.error().unwrap();
    assert_that!(error, contains_substring("404"));
    assert_that!(error, contains_substring(url.as_str()));
}

#[tokio::test]
async fn test_500_message_contains_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "crashed" })))
        .mount(&mock_server)
        .await;

    let client = WebhookClient::new(Some(&hook_url(&mock_server)), "ua", memory_storage());
    let result = client
        .send_webhook("Email Assistent", WorkflowType::Email, None)
        .await;

    assert!(!result.is_success());
    assert_that!(result.error().unwrap(), contains_substring("500"));
}

#[tokio::test]
async fn test_connection_refused_is_failure_with_message() {
    let mock_server = MockServer::start().await;
    let url = hook_url(&mock_server);
    drop(mock_server);

    let client = WebhookClient::new(Some(&url), "ua", memory_storage());
    let result = client
        .send_webhook("Email Assistent", WorkflowType::Email, None)
        .await;

    assert!(!result.is_success());
    assert!(!result.error().unwrap().is_empty());
}

#[tokio::test]
async fn test_payload_shape_and_content_type() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "cardName": "Revisor-håndbog Assistent",
            "workflowType": "Revisor_chat",
            "additionalInfo": { "message": "hej" }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = WebhookClient::new(Some(&hook_url(&mock_server)), "automate-test", memory_storage());
    let result = client
        .send_webhook(
            "Revisor-håndbog Assistent",
            WorkflowType::RevisorChat,
            info(&[("message", "hej")]),
        )
        .await;

    assert!(result.is_success());

    let requests = mock_server.received_requests().await.unwrap();
    let payload: WebhookPayload = requests[0].body_json().unwrap();
    assert_eq!(payload.user_data.user_agent.as_deref(), Some("automate-test"));
    assert!(is_session_id(payload.user_data.session_id.as_deref().unwrap()));
    assert!(payload.user_data.login_timestamp.is_some());
    assert!(chrono_like(&payload.timestamp), "bad timestamp {}", payload.timestamp);
}

#[tokio::test]
async fn test_payload_omits_additional_info_when_none() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = WebhookClient::new(Some(&hook_url(&mock_server)), "ua", memory_storage());
    client
        .send_webhook("Email Assistent", WorkflowType::Email, None)
        .await;

    let requests = mock_server.received_requests().await.unwrap();
    let body: Value = requests[0].body_json().unwrap();
    assert!(body.get("additionalInfo").is_none());
}

#[tokio::test]
async fn test_logged_in_identity_attached_to_payload() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let storage = memory_storage();
    let mut session = SessionStore::initialize(storage.clone());
    let session_id = session
        .login(UserData {
            user_email: Some("alice@example.com".into()),
            ..UserData::with_name("alice")
        })
        .session_id
        .clone();

    let client = WebhookClient::new(Some(&hook_url(&mock_server)), "ua", storage);
    let card = find_card("idea").unwrap();
    let result = client
        .send(card, &WorkflowRequest::Idea { text: "more coffee".into() })
        .await;

    assert!(result.is_success());
    let requests = mock_server.received_requests().await.unwrap();
    let payload: WebhookPayload = requests[0].body_json().unwrap();
    assert_eq!(payload.user_data.user_name.as_deref(), Some("alice"));
    assert_eq!(payload.user_data.user_email.as_deref(), Some("alice@example.com"));
    assert_eq!(payload.user_data.session_id, session_id);
    assert_eq!(payload.workflow_type, WorkflowType::IdeaBox);
    assert_eq!(payload.card_name, "Idé kassen");
    assert_eq!(
        payload.additional_info.unwrap()["ideaText"],
        json!("more coffee")
    );
}

#[tokio::test]
async fn test_concurrent_dispatches_resolve_independently() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "additionalInfo": { "message": "ok" } })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "additionalInfo": { "message": "fail" } })))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = WebhookClient::new(Some(&hook_url(&mock_server)), "ua", memory_storage());
    let (ok, failed) = tokio::join!(
        client.send_webhook(
            "Email Assistent",
            WorkflowType::Email,
            info(&[("message", "ok")])
        ),
        client.send_webhook(
            "Email Assistent",
            WorkflowType::Email,
            info(&[("message", "fail")])
        ),
    );

    assert!(ok.is_success());
    assert!(!failed.is_success());
    assert_that!(failed.error().unwrap(), contains_substring("500"));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_non_http_scheme_fails_without_request() {
    let client = WebhookClient::new(Some("ftp://hooks.example.com/automate"), "ua", memory_storage());
    let result = client
        .send_webhook("Email Assistent", WorkflowType::Email, None)
        .await;

    assert!(!result.is_success());
    assert_that!(result.error().unwrap(), contains_substring("unsupported scheme ftp"));
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`
fn chrono_like(value: &str) -> bool {
    value.len() == 24 && value.ends_with('Z') && value.as_bytes()[10] == b'T'
}
