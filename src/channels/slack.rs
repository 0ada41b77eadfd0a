//! Slack channel — RTM WebSocket session plus Web API sends.
//!
//! One connection lifecycle:
//! 1. `rtm.connect` → socket URL and the bot's user ID (its name comes
//!    from `BOT_NAME`)
//! 2. `users.list` / `conversations.list` → directory snapshot
//! 3. read frames one at a time: classify, dispatch, repeat
//!
//! When the socket closes the whole lifecycle is repeated after
//! `reconnect_delay`, so identity and directory are refreshed too.

use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tracing::{debug, info, warn};

use crate::channels::slack_api::SlackApiClient;
use crate::channels::slack_types::parse_event;
use crate::config::BotConfig;
use crate::directory::Directory;
use crate::error::{ChannelError, DispatchError};
use crate::pipeline::{
    BotIdentity, ChatTransport, PostOptions, Recipient, RoutingDecision, classify, dispatch,
};

/// Slack bot session. Owns the config and the Web API client; each
/// connection gets a fresh identity and directory.
pub struct SlackChannel {
    config: BotConfig,
    api: Arc<SlackApiClient>,
}

/// State of one live RTM connection.
pub struct SlackConnection {
    pub url: String,
    pub identity: BotIdentity,
    pub transport: SlackTransport,
}

impl SlackChannel {
    pub fn new(config: BotConfig) -> Self {
        let api = Arc::new(SlackApiClient::new(
            config.api_base.clone(),
            config.token.clone(),
        ));
        Self { config, api }
    }

    pub fn name(&self) -> &str {
        "slack"
    }

    /// Run until a fatal error. Only the first connect is fatal; later
    /// failures are logged and retried.
    pub async fn run(&self) -> Result<(), ChannelError> {
        let mut connected_once = false;

        loop {
            match self.connect().await {
                Ok(conn) => {
                    connected_once = true;
                    match self.listen(&conn).await {
                        Ok(()) => info!("Slack socket closed"),
                        Err(e) => warn!(error = %e, "Slack socket dropped"),
                    }
                }
                Err(e) if !connected_once => {
                    return Err(ChannelError::StartupFailed {
                        name: self.name().to_string(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => warn!(error = %e, "Slack reconnect failed"),
            }

            debug!(delay = ?self.config.reconnect_delay, "Waiting before reconnect");
            tokio::time::sleep(self.config.reconnect_delay).await;
        }
    }

    /// Start a connection lifecycle: socket URL, identity, directory.
    pub async fn connect(&self) -> Result<SlackConnection, ChannelError> {
        let rtm = self.api.rtm_connect().await?;
        let identity = rtm.identity(&self.config.name);

        let directory = self.api.load_directory().await?;
        let account = directory
            .user_by_id(&identity.id)
            .map_or(rtm.bot.name.as_str(), |u| u.name.as_str());
        info!(
            bot_id = %identity.id,
            bot_name = %identity.name,
            slack_account = %account,
            users = directory.users().len(),
            channels = directory.channels().len(),
            "Connected to Slack"
        );

        Ok(SlackConnection {
            url: rtm.url,
            identity,
            transport: SlackTransport::new(Arc::clone(&self.api), Arc::new(directory)),
        })
    }

    /// Read frames until the socket closes. Each event is handled to
    /// completion before the next frame is read.
    pub async fn listen(&self, conn: &SlackConnection) -> Result<(), ChannelError> {
        let (mut socket, _) = tokio_tungstenite::connect_async(conn.url.as_str())
            .await
            .map_err(|e| ChannelError::Disconnected {
                name: self.name().to_string(),
                reason: e.to_string(),
            })?;

        info!("Slack channel listening for messages...");

        while let Some(frame) = socket.next().await {
            match frame {
                Ok(WsMessage::Text(text)) => {
                    if let Err(e) = handle_frame(text.as_str(), &conn.identity, &conn.transport).await
                    {
                        warn!(error = %e, "Failed to deliver reply");
                    }
                }
                Ok(WsMessage::Close(frame)) => {
                    debug!(?frame, "Slack sent close frame");
                    return Ok(());
                }
                Ok(_) => {}
                Err(e) => {
                    return Err(ChannelError::Disconnected {
                        name: self.name().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Classify one RTM frame and dispatch the reply. Frames that are not
/// JSON events are ignored.
pub async fn handle_frame(
    frame: &str,
    identity: &BotIdentity,
    transport: &dyn ChatTransport,
) -> Result<RoutingDecision, DispatchError> {
    let Some(msg) = parse_event(frame) else {
        debug!("Skipping non-JSON frame");
        return Ok(RoutingDecision::Ignore);
    };

    let decision = classify(&msg, identity);
    if !decision.is_ignore() {
        dispatch(&decision, transport).await?;
    }
    Ok(decision)
}

// ── ChatTransport implementation ────────────────────────────────────

/// Sends through the Web API, resolving names against the directory
/// loaded for the current connection.
pub struct SlackTransport {
    api: Arc<SlackApiClient>,
    directory: Arc<Directory>,
}

impl SlackTransport {
    pub fn new(api: Arc<SlackApiClient>, directory: Arc<Directory>) -> Self {
        Self { api, directory }
    }
}

#[async_trait]
impl ChatTransport for SlackTransport {
    async fn send_direct_message_to_user(
        &self,
        recipient: &Recipient,
        text: &str,
        options: PostOptions,
    ) -> Result<(), ChannelError> {
        if recipient.is_empty() {
            return Err(ChannelError::UnknownUser(String::new()));
        }

        match recipient {
            // Slack routes a post addressed to a user ID to that user's DM.
            Recipient::Mention(user_id) => self.api.post_message(user_id, text, options).await,
            Recipient::Name(name) => {
                let user = self
                    .directory
                    .user_by_name(name)
                    .ok_or_else(|| ChannelError::UnknownUser(name.clone()))?;
                let dm_channel = self.api.open_direct_message(&user.id).await?;
                self.api.post_message(&dm_channel, text, options).await
            }
        }
    }

    async fn send_direct_message_to_channel(
        &self,
        channel_name: &str,
        text: &str,
        options: PostOptions,
    ) -> Result<(), ChannelError> {
        let channel = self
            .directory
            .channel_by_name(channel_name)
            .ok_or_else(|| ChannelError::UnknownChannel(channel_name.to_string()))?;
        self.api.post_message(&channel.id, text, options).await
    }

    fn directory(&self) -> Arc<Directory> {
        Arc::clone(&self.directory)
    }
}
