use crate::DEFAULT_MAINTENANCE_MODE;

use serde::Deserialize;

/// Application-wide switches.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Render the maintenance placeholder instead of running any command
    pub maintenance_mode: bool,
    /// User agent reported in outgoing payloads
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            maintenance_mode: DEFAULT_MAINTENANCE_MODE,
            user_agent: default_user_agent(),
        }
    }
}

/// `automate/<version> (<os>; <arch>)`
pub fn default_user_agent() -> String {
    format!(
        "automate/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
