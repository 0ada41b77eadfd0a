//! Capability interface the dispatcher sends through.

use std::sync::Arc;

use async_trait::async_trait;

use crate::directory::Directory;
use crate::error::ChannelError;
use crate::pipeline::types::{PostOptions, Recipient};

/// The slice of a chat client the reply dispatcher needs: two send
/// primitives and read access to the directory.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a direct message to a user, addressed by ID (mention) or name.
    async fn send_direct_message_to_user(
        &self,
        recipient: &Recipient,
        text: &str,
        options: PostOptions,
    ) -> Result<(), ChannelError>;

    /// Post a message to a channel, addressed by channel name.
    async fn send_direct_message_to_channel(
        &self,
        channel_name: &str,
        text: &str,
        options: PostOptions,
    ) -> Result<(), ChannelError>;

    /// Current snapshot of known users and channels.
    fn directory(&self) -> Arc<Directory>;
}
