//! Slack wire types — RTM events and Web API responses.

use serde::Deserialize;

use crate::directory::DirectoryEntry;
use crate::pipeline::types::{BotIdentity, IncomingMessage, MessageKind};

// ── RTM events ──────────────────────────────────────────────────────

/// Raw RTM event. Every field is optional; Slack sends many shapes.
#[derive(Debug, Default, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: Option<String>,
    text: Option<String>,
    user: Option<String>,
    channel: Option<String>,
}

impl From<RawEvent> for IncomingMessage {
    fn from(raw: RawEvent) -> Self {
        let kind = match raw.kind.as_deref() {
            Some("message") => MessageKind::Message,
            _ => MessageKind::Other,
        };
        Self {
            kind,
            text: raw.text,
            author_id: raw.user.unwrap_or_default(),
            channel_id: raw.channel.unwrap_or_default(),
        }
    }
}

/// Parse one RTM text frame. Returns `None` for anything that is not a
/// JSON object.
pub fn parse_event(frame: &str) -> Option<IncomingMessage> {
    serde_json::from_str::<RawEvent>(frame).ok().map(Into::into)
}

// ── Web API responses ───────────────────────────────────────────────

/// `rtm.connect`
#[derive(Debug, Deserialize)]
pub struct RtmConnectResponse {
    pub url: String,
    #[serde(rename = "self")]
    pub bot: SlackUser,
}

impl RtmConnectResponse {
    /// Slack's user ID for the bot, paired with the configured display
    /// name that messages are matched against.
    pub fn identity(&self, name: &str) -> BotIdentity {
        BotIdentity::new(&self.bot.id, name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackConversation {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub next_cursor: String,
}

impl ResponseMetadata {
    /// Cursor for the next page, if there is one.
    pub fn next(&self) -> Option<&str> {
        let cursor = self.next_cursor.trim();
        (!cursor.is_empty()).then_some(cursor)
    }
}

/// `users.list` page.
#[derive(Debug, Deserialize)]
pub struct UsersListResponse {
    #[serde(default)]
    pub members: Vec<SlackUser>,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

/// `conversations.list` page.
#[derive(Debug, Deserialize)]
pub struct ConversationsListResponse {
    #[serde(default)]
    pub channels: Vec<SlackConversation>,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

/// `conversations.open`
#[derive(Debug, Deserialize)]
pub struct ConversationsOpenResponse {
    pub channel: SlackConversation,
}

impl From<SlackUser> for DirectoryEntry {
    fn from(user: SlackUser) -> Self {
        DirectoryEntry::new(user.id, user.name)
    }
}

impl From<SlackConversation> for DirectoryEntry {
    fn from(channel: SlackConversation) -> Self {
        DirectoryEntry::new(channel.id, channel.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_event() {
        let msg = parse_event(
            r#"{"type":"message","text":"hey reception","user":"U999","channel":"C1","ts":"1.2"}"#,
        )
        .unwrap();
        assert_eq!(msg, IncomingMessage::new("U999", "C1", "hey reception"));
    }

    #[test]
    fn other_event_types_are_other() {
        let msg = parse_event(r#"{"type":"hello"}"#).unwrap();
        assert_eq!(msg.kind, MessageKind::Other);
        assert_eq!(msg.text, None);

        let typing = parse_event(r#"{"type":"user_typing","user":"U1","channel":"C1"}"#).unwrap();
        assert_eq!(typing.kind, MessageKind::Other);
    }

    #[test]
    fn missing_fields_become_empty() {
        let msg = parse_event(r#"{"type":"message","subtype":"message_changed","channel":"C1"}"#)
            .unwrap();
        assert_eq!(msg.kind, MessageKind::Message);
        assert_eq!(msg.text, None);
        assert_eq!(msg.author_id, "");
        assert_eq!(msg.chat_text(), None);
    }

    #[test]
    fn garbage_frames_are_skipped() {
        assert!(parse_event("not json").is_none());
        assert!(parse_event("[1,2,3]").is_none());
    }

    #[test]
    fn rtm_connect_identity() {
        let resp: RtmConnectResponse = serde_json::from_value(serde_json::json!({
            "ok": true,
            "url": "wss://example.invalid/rtm",
            "self": {"id": "U000", "name": "reception"},
            "team": {"id": "T1", "name": "Acme"}
        }))
        .unwrap();
        assert_eq!(resp.identity("frontdesk"), BotIdentity::new("U000", "frontdesk"));
        assert_eq!(resp.bot.name, "reception");
        assert_eq!(resp.url, "wss://example.invalid/rtm");
    }

    #[test]
    fn response_metadata_cursor() {
        let empty = ResponseMetadata::default();
        assert_eq!(empty.next(), None);
        let blank = ResponseMetadata {
            next_cursor: " ".into(),
        };
        assert_eq!(blank.next(), None);
        let more = ResponseMetadata {
            next_cursor: "dXNlcjpVMDYx".into(),
        };
        assert_eq!(more.next(), Some("dXNlcjpVMDYx"));
    }
}
