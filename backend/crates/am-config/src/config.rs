use crate::{
    AppConfig, CONFIG_DIR_ENV, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRNAME,
    LoggingConfig, StorageConfig, WEBHOOK_URL_ENV, WebhookConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub webhook: WebhookConfig,
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AUTOMATE_CONFIG_DIR env var, else use ./.automate/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AUTOMATE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AUTOMATE_CONFIG_DIR env var > ./.automate/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRNAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    ///
    /// The webhook URL is not checked here: a bad URL only fails dispatches,
    /// and [`Config::log_summary`] warns about it.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;

        if self.app.user_agent.trim().is_empty() {
            return Err(ConfigError::config("app.user_agent cannot be empty"));
        }

        Ok(())
    }

    /// Get absolute path to the durable storage directory.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.dir))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(ref filename) = self.logging.file else {
            return Ok(None);
        };

        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
    }

    /// Log configuration summary. Only the webhook host is logged.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  webhook: {}",
            self.webhook
                .host()
                .unwrap_or_else(|| String::from("(not configured)"))
        );
        if let Err(e) = self.webhook.validate() {
            warn!("{e}; workflow dispatches will fail");
        }
        info!("  maintenance_mode: {}", self.app.maintenance_mode);
        info!("  storage: {}", self.storage.dir);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Webhook
        Self::apply_env_option_string(WEBHOOK_URL_ENV, &mut self.webhook.url);

        // App
        Self::apply_env_bool("AUTOMATE_MAINTENANCE_MODE", &mut self.app.maintenance_mode);
        Self::apply_env_string("AUTOMATE_USER_AGENT", &mut self.app.user_agent);

        // Storage
        Self::apply_env_string("AUTOMATE_STORAGE_DIR", &mut self.storage.dir);

        // Logging
        Self::apply_env_parse("AUTOMATE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AUTOMATE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AUTOMATE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
