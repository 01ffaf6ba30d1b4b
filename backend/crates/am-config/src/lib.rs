mod app_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;
mod webhook_config;

#[cfg(test)]
mod tests;

pub use app_config::AppConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use webhook_config::WebhookConfig;

pub const CONFIG_DIR_ENV: &str = "AUTOMATE_CONFIG_DIR";
pub const WEBHOOK_URL_ENV: &str = "AUTOMATE_WEBHOOK_URL";

const DEFAULT_CONFIG_DIRNAME: &str = ".automate";
const DEFAULT_STORAGE_DIRECTORY: &str = "storage";
const DEFAULT_MAINTENANCE_MODE: bool = false;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
