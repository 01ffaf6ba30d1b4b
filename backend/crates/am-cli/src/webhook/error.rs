use std::panic::Location;

use am_config::WEBHOOK_URL_ENV;
use error_location::ErrorLocation;
use thiserror::Error;

const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Why a dispatch did not succeed.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Webhook URL not configured {location}")]
    NotConfigured { location: ErrorLocation },

    #[error("Invalid webhook URL {url}: {reason} {location}")]
    InvalidUrl {
        url: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Webhook not found at {url} {location}")]
    NotFound { url: String, location: ErrorLocation },

    #[error("Webhook returned HTTP {status} {location}")]
    Status { status: u16, location: ErrorLocation },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl DispatchError {
    #[track_caller]
    pub fn not_configured() -> Self {
        DispatchError::NotConfigured {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        DispatchError::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(url: impl Into<String>) -> Self {
        DispatchError::NotFound {
            url: url.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn status(status: u16) -> Self {
        DispatchError::Status {
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text shown to the user, without source locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotConfigured { .. } => format!(
                "No webhook URL configured. Please set {WEBHOOK_URL_ENV} in your environment or config.toml"
            ),
            Self::InvalidUrl { url, reason, .. } => format!(
                "Invalid webhook URL '{url}' ({reason}). Please set an http or https URL in {WEBHOOK_URL_ENV}"
            ),
            Self::NotFound { url, .. } => format!(
                "Webhook not found (404). Please check that the webhook is created and the URL is correct: {url}"
            ),
            Self::Status { status, .. } => format!("HTTP error! status: {status}"),
            Self::Http { message, .. } if message.trim().is_empty() => UNKNOWN_ERROR.to_string(),
            Self::Http { message, .. } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for DispatchError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        DispatchError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, DispatchError>;
