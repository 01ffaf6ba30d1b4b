use crate::WebhookConfig;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};

#[test]
fn given_unset_url_when_url_then_none() {
    let config = WebhookConfig::default();
    assert_that!(config.url(), none());
}

#[test]
fn given_blank_url_when_url_then_none() {
    let config = WebhookConfig {
        url: Some("   ".to_string()),
    };
    assert_that!(config.url(), none());
}

#[test]
fn given_padded_url_when_url_then_trimmed() {
    let config = WebhookConfig {
        url: Some("  https://hooks.example.com/a  ".to_string()),
    };
    assert_that!(config.url(), some(eq("https://hooks.example.com/a")));
}

#[test]
fn given_blank_url_when_validate_then_ok() {
    let config = WebhookConfig {
        url: Some(String::new()),
    };
    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_relative_url_when_validate_then_error() {
    let config = WebhookConfig {
        url: Some("/webhook/automate".to_string()),
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_ftp_url_when_validate_then_error() {
    let config = WebhookConfig {
        url: Some("ftp://hooks.example.com/a".to_string()),
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_url_with_path_when_host_then_only_host_returned() {
    let config = WebhookConfig {
        url: Some("https://n8n.example.com/webhook/secret-id".to_string()),
    };
    assert_that!(config.host(), some(eq("n8n.example.com")));
}
