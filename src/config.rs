use std::{env, path::PathBuf};

use burmuda_notification::EmailConfig;
use burmuda_submission::DEFAULT_CHANNEL_CAPACITY;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use validator::ValidateEmail;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Built marketing site served for every path the API does not handle
    #[serde(default)]
    pub public_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_channel_capacity() -> usize {
    DEFAULT_CHANNEL_CAPACITY
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (BURMUDA__SERVER__PORT, etc.)
    /// 2. Config file specified by path, `CONFIG_PATH` or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("observability.log_level", default_log_level())?
            .set_default(
                "notification.channel_capacity",
                DEFAULT_CHANNEL_CAPACITY as u64,
            )?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("BURMUDA")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.notification.channel_capacity == 0 {
            return Err("Notification channel_capacity must be at least 1".to_string());
        }
        if self.email.enabled {
            if !self.email.from_address.validate_email() {
                return Err(format!(
                    "Email from_address '{}' is not a valid email",
                    self.email.from_address
                ));
            }
            if !self.email.contact_address.validate_email() {
                return Err(format!(
                    "Email contact_address '{}' is not a valid email",
                    self.email.contact_address
                ));
            }
        }
        Ok(())
    }
}
