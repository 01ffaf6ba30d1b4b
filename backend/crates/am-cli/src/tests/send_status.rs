use crate::{SendIndicator, SendStatus, WebhookResult};

use std::time::Duration;

#[test]
fn test_new_indicator_is_idle() {
    assert_eq!(SendIndicator::new().status(), SendStatus::Idle);
}

#[test]
fn test_begin_while_sending_is_refused() {
    let indicator = SendIndicator::new();
    let first = indicator.begin();

    assert!(first.is_some());
    assert!(indicator.is_sending());
    assert!(indicator.begin().is_none());
}

#[test]
fn test_finish_records_outcome() {
    let indicator = SendIndicator::new();
    let ticket = indicator.begin().unwrap();

    indicator.finish(ticket, &WebhookResult::failure("HTTP error! status: 500"));

    assert_eq!(
        indicator.status(),
        SendStatus::Failed("HTTP error! status: 500".into())
    );
    assert!(indicator.begin().is_some(), "trigger re-enabled after finish");
}

#[test]
fn test_stale_ticket_does_not_overwrite_newer_send() {
    let indicator = SendIndicator::new();
    let old = indicator.begin().unwrap();
    indicator.finish(old, &WebhookResult::success("ok"));
    let _new = indicator.begin().unwrap();

    indicator.finish(old, &WebhookResult::failure("late"));

    assert_eq!(indicator.status(), SendStatus::Sending);
}

#[tokio::test]
async fn test_reset_after_returns_to_idle() {
    let indicator = SendIndicator::new();
    let ticket = indicator.begin().unwrap();
    indicator.finish(ticket, &WebhookResult::success("ok"));

    indicator.reset_after(ticket, Duration::from_millis(10)).await;

    assert_eq!(indicator.status(), SendStatus::Idle);
}

#[tokio::test]
async fn test_reset_after_skipped_when_new_send_started() {
    let indicator = SendIndicator::new();
    let ticket = indicator.begin().unwrap();
    indicator.finish(ticket, &WebhookResult::success("ok"));

    let handle = indicator.clone();
    let reset = tokio::spawn(async move {
        handle.reset_after(ticket, Duration::from_millis(50)).await;
    });
    let newer = indicator.begin().unwrap();
    reset.await.unwrap();

    assert_eq!(indicator.status(), SendStatus::Sending);
    indicator.finish(newer, &WebhookResult::success("ok"));
    assert_eq!(indicator.status(), SendStatus::Success);
}

#[test]
fn test_status_serializes_with_tag() {
    let value = serde_json::to_value(SendStatus::Failed("boom".into())).unwrap();
    assert_eq!(value, serde_json::json!({ "status": "failed", "error": "boom" }));
}
