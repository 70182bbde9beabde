use config::{Config, File};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<config::ConfigError> for SettingsError {
    fn from(err: config::ConfigError) -> Self {
        SettingsError::Configuration(err.to_string())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    rewards_api::DEFAULT_BASE_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Settings {
    /// Load settings from `$REWARDS_CONFIG` (default `config.toml`, optional)
    /// overlaid with `REWARDS_*` environment variables
    pub fn new() -> Result<Self, SettingsError> {
        let config_path =
            std::env::var("REWARDS_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(
                config::Environment::with_prefix("REWARDS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.base_url.is_empty() {
            return Err(SettingsError::Invalid("base_url is required".to_string()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(SettingsError::Invalid(
                "base_url must be a valid HTTP(S) URL".to_string(),
            ));
        }
        Ok(())
    }
}
