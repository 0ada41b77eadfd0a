//! Reply dispatcher — turns a routing decision into one outbound message.

use tracing::info;

use crate::error::DispatchError;
use crate::pipeline::transport::ChatTransport;
use crate::pipeline::types::{ACKNOWLEDGEMENT, MAIL_NOTICE, PostOptions, RoutingDecision};

/// Send the reply for `decision`, if any.
///
/// At most one message is sent and nothing is retried; transport failures
/// come back as `DispatchError::SendFailed`.
pub async fn dispatch(
    decision: &RoutingDecision,
    transport: &dyn ChatTransport,
) -> Result<(), DispatchError> {
    let options = PostOptions::default();

    match decision {
        RoutingDecision::Ignore => Ok(()),

        RoutingDecision::MailNotice { recipient } => {
            transport
                .send_direct_message_to_user(recipient, MAIL_NOTICE, options)
                .await?;
            info!(recipient = %recipient.as_str(), "Mail notice sent");
            Ok(())
        }

        RoutingDecision::Acknowledge { channel_id } => {
            let directory = transport.directory();
            let channel = directory.channel_by_id(channel_id).ok_or_else(|| {
                DispatchError::UnknownChannel {
                    channel_id: channel_id.clone(),
                }
            })?;
            transport
                .send_direct_message_to_channel(&channel.name, ACKNOWLEDGEMENT, options)
                .await?;
            info!(channel = %channel.name, "Acknowledgement posted");
            Ok(())
        }
    }
}
