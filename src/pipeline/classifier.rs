//! Message classifier — decides whether and how to reply.
//!
//! Rules, first match wins:
//! - not a chat message with text → Ignore
//! - written by the bot itself → Ignore
//! - mentions neither "reception" nor the bot's name → Ignore
//! - contains "mail" → MailNotice for the extracted recipient
//! - anything else → Acknowledge in the originating channel

use tracing::debug;

use crate::pipeline::recipient::extract_recipient;
use crate::pipeline::types::{BotIdentity, IncomingMessage, RoutingDecision};

/// Keyword that always addresses the bot, whatever its configured name.
const RECEPTION_KEYWORD: &str = "reception";

/// Marks a request as a package notification. Case-sensitive.
const MAIL_KEYWORD: &str = "mail";

/// Classify one message. Pure: same input, same decision.
pub fn classify(msg: &IncomingMessage, identity: &BotIdentity) -> RoutingDecision {
    let Some(text) = msg.chat_text() else {
        debug!(kind = ?msg.kind, "Ignoring event without chat text");
        return RoutingDecision::Ignore;
    };

    if is_from_bot(msg, identity) {
        debug!(channel = %msg.channel_id, "Ignoring own message");
        return RoutingDecision::Ignore;
    }

    if !mentions_bot(text, identity) {
        debug!(channel = %msg.channel_id, "Ignoring message not addressed to bot");
        return RoutingDecision::Ignore;
    }

    let decision = if text.contains(MAIL_KEYWORD) {
        RoutingDecision::MailNotice {
            recipient: extract_recipient(text),
        }
    } else {
        RoutingDecision::Acknowledge {
            channel_id: msg.channel_id.clone(),
        }
    };

    debug!(
        author = %msg.author_id,
        channel = %msg.channel_id,
        ?decision,
        "Message addressed to bot"
    );
    decision
}

fn is_from_bot(msg: &IncomingMessage, identity: &BotIdentity) -> bool {
    msg.author_id == identity.id
}

/// Substring match, so "receptionist" counts too.
fn mentions_bot(text: &str, identity: &BotIdentity) -> bool {
    let lowered = text.to_lowercase();
    lowered.contains(RECEPTION_KEYWORD) || lowered.contains(&identity.name.to_lowercase())
}
