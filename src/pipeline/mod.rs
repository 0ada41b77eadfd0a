//! Message pipeline.
//!
//! Every realtime event flows through:
//! 1. `classifier::classify()` — pure decision over the event and bot identity
//! 2. `recipient::extract_recipient()` — only for "mail" requests
//! 3. `dispatcher::dispatch()` — one outbound message via a `ChatTransport`

pub mod classifier;
pub mod dispatcher;
pub mod recipient;
pub mod transport;
pub mod types;

pub use classifier::classify;
pub use dispatcher::dispatch;
pub use recipient::extract_recipient;
pub use transport::ChatTransport;
pub use types::{
    ACKNOWLEDGEMENT, BotIdentity, IncomingMessage, MAIL_NOTICE, MessageKind, PostOptions,
    Recipient, RoutingDecision,
};
