//! Shared types for the message pipeline.

use serde::{Deserialize, Serialize};

// ── Inbound message ─────────────────────────────────────────────────

/// Kind of realtime event. Only `Message` is ever acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Message,
    Other,
}

/// One realtime event, as seen by the classifier.
///
/// Transport adapters convert their native events into this struct.
/// Missing fields are left empty instead of failing, so a malformed
/// event simply classifies as `Ignore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub kind: MessageKind,
    pub text: Option<String>,
    pub author_id: String,
    pub channel_id: String,
}

impl IncomingMessage {
    /// A chat message with text.
    pub fn new(
        author_id: impl Into<String>,
        channel_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind: MessageKind::Message,
            text: Some(text.into()),
            author_id: author_id.into(),
            channel_id: channel_id.into(),
        }
    }

    /// Text of the message if it is a chat message with a non-empty body.
    pub fn chat_text(&self) -> Option<&str> {
        match (self.kind, self.text.as_deref()) {
            (MessageKind::Message, Some(text)) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

// ── Identity ────────────────────────────────────────────────────────

/// The bot's own identity in the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotIdentity {
    pub id: String,
    pub name: String,
}

impl BotIdentity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// ── Routing decision ────────────────────────────────────────────────

/// Who a mail notice goes to, and how the token was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", content = "value", rename_all = "snake_case")]
pub enum Recipient {
    /// Unwrapped from a mention such as `<@U123>`; holds the user ID.
    Mention(String),
    /// Plain display name, resolved through the user directory on send.
    Name(String),
}

impl Recipient {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mention(id) => id,
            Self::Name(name) => name,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

/// What to do with an incoming message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RoutingDecision {
    /// Not for us; no reply.
    Ignore,
    /// DM the package notice to the recipient.
    MailNotice { recipient: Recipient },
    /// Post the acknowledgement back to the originating channel.
    Acknowledge { channel_id: String },
}

impl RoutingDecision {
    pub fn is_ignore(&self) -> bool {
        matches!(self, Self::Ignore)
    }
}

// ── Outbound ────────────────────────────────────────────────────────

/// Options attached to every outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOptions {
    /// Post as the bot user rather than as an app integration.
    pub as_user: bool,
}

impl Default for PostOptions {
    fn default() -> Self {
        Self { as_user: true }
    }
}

/// Notice sent to the recipient of a package.
pub const MAIL_NOTICE: &str = "A package/envelope addressed to you has arrived. Could you please collect from reception within the next hour or two. Alternatively you can get someone from your department to collect the package on your behalf. Unfortunately our reception area is very limited in storage and not equipped to store packages for long periods of time and with such in mind we will be (starting) a new process for parcel pick up. For any parcels not collected from reception within the time frame will be moved into the Level 18 kitchen for you to collect at your leisure. Thank you for your understanding!";

/// Reply posted for any other request addressed to the bot.
pub const ACKNOWLEDGEMENT: &str = "message received captain";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_text_requires_message_kind_and_text() {
        let msg = IncomingMessage::new("U1", "C1", "hi");
        assert_eq!(msg.chat_text(), Some("hi"));

        let empty = IncomingMessage::new("U1", "C1", "");
        assert_eq!(empty.chat_text(), None);

        let other = IncomingMessage {
            kind: MessageKind::Other,
            ..IncomingMessage::new("U1", "C1", "hi")
        };
        assert_eq!(other.chat_text(), None);

        let no_text = IncomingMessage {
            text: None,
            ..IncomingMessage::new("U1", "C1", "hi")
        };
        assert_eq!(no_text.chat_text(), None);
    }

    #[test]
    fn recipient_as_str() {
        assert_eq!(Recipient::Mention("U123".into()).as_str(), "U123");
        assert_eq!(Recipient::Name("janedoe".into()).as_str(), "janedoe");
        assert!(Recipient::Name(String::new()).is_empty());
    }

    #[test]
    fn post_options_default_as_user() {
        assert!(PostOptions::default().as_user);
    }

    #[test]
    fn decision_serializes_with_action_tag() {
        let json = serde_json::to_value(RoutingDecision::Acknowledge {
            channel_id: "C1".into(),
        })
        .unwrap();
        assert_eq!(json["action"], "acknowledge");
        assert_eq!(json["channel_id"], "C1");
    }
}
