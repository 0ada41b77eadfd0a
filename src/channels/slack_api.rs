//! Slack Web API client — the handful of methods the bot calls.

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::channels::slack_types::{
    ConversationsListResponse, ConversationsOpenResponse, RtmConnectResponse, UsersListResponse,
};
use crate::directory::{Directory, DirectoryEntry};
use crate::error::ChannelError;
use crate::pipeline::types::PostOptions;

/// Page size for `users.list` / `conversations.list`.
const PAGE_LIMIT: &str = "200";

/// Maximum pages fetched per list call (50 × 200 = 10,000 entries).
const MAX_PAGES: usize = 50;

/// Thin wrapper over the Slack Web API.
pub struct SlackApiClient {
    client: reqwest::Client,
    api_base: String,
    token: SecretString,
}

impl SlackApiClient {
    pub fn new(api_base: impl Into<String>, token: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into(),
            token,
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_base)
    }

    /// Open an RTM session: WebSocket URL plus the bot's own user.
    pub async fn rtm_connect(&self) -> Result<RtmConnectResponse, ChannelError> {
        self.get("rtm.connect", &[]).await
    }

    /// Fetch all users and channels visible to the bot.
    pub async fn load_directory(&self) -> Result<Directory, ChannelError> {
        let users = self.list_users().await?;
        let channels = self.list_channels().await?;
        debug!(
            users = users.len(),
            channels = channels.len(),
            "Slack directory loaded"
        );
        Ok(Directory::new(users, channels))
    }

    async fn list_users(&self) -> Result<Vec<DirectoryEntry>, ChannelError> {
        let mut users = Vec::new();
        let mut cursor: Option<String> = None;

        for _ in 0..MAX_PAGES {
            let mut params = vec![("limit", PAGE_LIMIT.to_string())];
            if let Some(ref next) = cursor {
                params.push(("cursor", next.clone()));
            }
            let page: UsersListResponse = self.get("users.list", &params).await?;
            users.extend(
                page.members
                    .into_iter()
                    .filter(|u| !u.deleted)
                    .map(DirectoryEntry::from),
            );
            match page.response_metadata.next() {
                Some(next) => cursor = Some(next.to_string()),
                None => break,
            }
        }

        Ok(users)
    }

    async fn list_channels(&self) -> Result<Vec<DirectoryEntry>, ChannelError> {
        let mut channels = Vec::new();
        let mut cursor: Option<String> = None;

        for _ in 0..MAX_PAGES {
            let mut params = vec![
                ("limit", PAGE_LIMIT.to_string()),
                ("types", "public_channel,private_channel".to_string()),
                ("exclude_archived", "true".to_string()),
            ];
            if let Some(ref next) = cursor {
                params.push(("cursor", next.clone()));
            }
            let page: ConversationsListResponse = self.get("conversations.list", &params).await?;
            channels.extend(page.channels.into_iter().map(DirectoryEntry::from));
            match page.response_metadata.next() {
                Some(next) => cursor = Some(next.to_string()),
                None => break,
            }
        }

        Ok(channels)
    }

    /// Open (or reuse) the DM conversation with a user; returns its channel ID.
    pub async fn open_direct_message(&self, user_id: &str) -> Result<String, ChannelError> {
        let resp: ConversationsOpenResponse = self
            .post("conversations.open", serde_json::json!({ "users": user_id }))
            .await?;
        Ok(resp.channel.id)
    }

    /// `chat.postMessage` to a channel, DM or user ID.
    pub async fn post_message(
        &self,
        channel: &str,
        text: &str,
        options: PostOptions,
    ) -> Result<(), ChannelError> {
        let body = serde_json::json!({
            "channel": channel,
            "text": text,
            "as_user": options.as_user,
        });
        let _: serde_json::Value = self.post("chat.postMessage", body).await?;
        Ok(())
    }

    // ── Transport ──────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<T, ChannelError> {
        let resp = self
            .client
            .get(self.api_url(method))
            .bearer_auth(self.token.expose_secret())
            .query(params)
            .send()
            .await
            .map_err(|e| ChannelError::Http(e.to_string()))?;
        Self::decode(method, resp).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        method: &str,
        body: serde_json::Value,
    ) -> Result<T, ChannelError> {
        let resp = self
            .client
            .post(self.api_url(method))
            .bearer_auth(self.token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ChannelError::SendFailed {
                name: "slack".into(),
                reason: e.to_string(),
            })?;
        Self::decode(method, resp).await
    }

    /// Check HTTP status and Slack's `ok` flag, then decode the payload.
    async fn decode<T: DeserializeOwned>(
        method: &str,
        resp: reqwest::Response,
    ) -> Result<T, ChannelError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ChannelError::Http(format!("{method} returned {status}: {body}")));
        }

        let data: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ChannelError::Http(format!("{method}: invalid JSON: {e}")))?;
        check_ok(method, &data)?;

        serde_json::from_value(data)
            .map_err(|e| ChannelError::Http(format!("{method}: unexpected response shape: {e}")))
    }
}

/// Turn `{"ok": false, "error": "..."}` into `ChannelError::Api`.
fn check_ok(method: &str, data: &serde_json::Value) -> Result<(), ChannelError> {
    if data.get("ok").and_then(serde_json::Value::as_bool) == Some(true) {
        return Ok(());
    }
    let error = data
        .get("error")
        .and_then(|e| e.as_str())
        .unwrap_or("unknown_error")
        .to_string();
    Err(ChannelError::Api {
        method: method.to_string(),
        error,
    })
}
