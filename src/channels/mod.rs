//! Chat channel adapters.

pub mod slack;
pub mod slack_api;
pub mod slack_types;

pub use slack::{SlackChannel, SlackConnection, SlackTransport, handle_frame};
pub use slack_api::SlackApiClient;
