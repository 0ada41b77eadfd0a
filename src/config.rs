//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default display name the bot answers to.
pub const DEFAULT_BOT_NAME: &str = "reception";

/// Default Slack Web API base URL.
pub const DEFAULT_SLACK_API_BASE: &str = "https://slack.com/api";

/// Bot configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Slack bot token (`BOT_API_KEY`).
    pub token: SecretString,
    /// Name the bot answers to, matched case-insensitively (`BOT_NAME`).
    pub name: String,
    /// Web API base URL without a trailing slash (`SLACK_API_BASE`).
    pub api_base: String,
    /// Delay before reconnecting after the socket closes (`BOT_RECONNECT_SECS`).
    pub reconnect_delay: Duration,
}

impl BotConfig {
    /// Build a config with defaults for everything except the token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            name: DEFAULT_BOT_NAME.to_string(),
            api_base: DEFAULT_SLACK_API_BASE.to_string(),
            reconnect_delay: Duration::from_secs(5),
        }
    }

    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("BOT_API_KEY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("BOT_API_KEY".into()))?;

        let mut config = Self::new(token);

        if let Some(name) = lookup("BOT_NAME") {
            let name = name.trim();
            if name.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "BOT_NAME".into(),
                    message: "must not be empty".into(),
                });
            }
            config.name = name.to_string();
        }

        if let Some(base) = lookup("SLACK_API_BASE") {
            let base = base.trim().trim_end_matches('/');
            if !base.is_empty() {
                config.api_base = base.to_string();
            }
        }

        if let Some(secs) = lookup("BOT_RECONNECT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "BOT_RECONNECT_SECS".into(),
                message: format!("expected a number of seconds, got {secs:?}"),
            })?;
            config.reconnect_delay = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
