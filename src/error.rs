//! Error types for the reception bot.

/// Top-level error type for the bot.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Chat transport errors (Slack Web API and RTM socket).
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Channel {name} failed to start: {reason}")]
    StartupFailed { name: String, reason: String },

    #[error("Channel {name} disconnected: {reason}")]
    Disconnected { name: String, reason: String },

    #[error("Failed to send message on channel {name}: {reason}")]
    SendFailed { name: String, reason: String },

    #[error("Slack API {method} returned error: {error}")]
    Api { method: String, error: String },

    #[error("No user named {0:?} in the directory")]
    UnknownUser(String),

    #[error("No channel named {0:?} in the directory")]
    UnknownChannel(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

/// Errors surfaced by the reply dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The originating channel ID is not in the directory cache.
    #[error("Unknown channel {channel_id}: not present in the directory")]
    UnknownChannel { channel_id: String },

    /// The transport rejected or could not deliver the reply.
    #[error("Reply could not be delivered: {reason}")]
    SendFailed { reason: String },
}

impl From<ChannelError> for DispatchError {
    fn from(err: ChannelError) -> Self {
        Self::SendFailed {
            reason: err.to_string(),
        }
    }
}
