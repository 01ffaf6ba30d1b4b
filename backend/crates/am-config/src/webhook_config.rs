use crate::{ConfigError, ConfigErrorResult};

use reqwest::Url;
use serde::Deserialize;

/// Destination of outgoing workflow notifications.
///
/// An unset or blank URL is a valid configuration: dispatches then fail
/// with a configuration message instead of touching the network.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub url: Option<String>,
}

impl WebhookConfig {
    /// Trimmed URL, or None when unset or blank.
    pub fn url(&self) -> Option<String> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from)
    }

    /// Host part of the configured URL, for log output.
    pub fn host(&self) -> Option<String> {
        self.url()
            .and_then(|url| Url::parse(&url).ok())
            .and_then(|url| url.host_str().map(String::from))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(url) = self.url() else {
            return Ok(());
        };

        let parsed = Url::parse(&url)
            .map_err(|e| ConfigError::webhook(format!("webhook.url is not a valid URL: {e}")))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::webhook(format!(
                "webhook.url must use http or https, got {}",
                parsed.scheme()
            )));
        }

        Ok(())
    }
}
