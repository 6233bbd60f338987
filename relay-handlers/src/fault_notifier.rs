//! Host-level fault hook: logs faults raised while routing or delivering an event and, when the
//! conversation is known, tells the user something went wrong.

use relay_core::{Bot, InboundEvent, RelayError};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::messages::BotMessages;

/// Sends the generic fault text; never surfaces error details to the user.
#[derive(Clone)]
pub struct FaultNotifier {
    bot: Arc<dyn Bot>,
    messages: BotMessages,
}

impl FaultNotifier {
    pub fn new(bot: Arc<dyn Bot>, messages: BotMessages) -> Self {
        Self { bot, messages }
    }

    /// Records `fault` and, if `event` identifies a conversation, sends the fault fallback there.
    /// Returns true when the fallback was delivered. A failing fallback send is logged and dropped.
    pub async fn notify(&self, event: Option<&InboundEvent>, fault: &RelayError) -> bool {
        let Some(event) = event else {
            warn!(error = %fault, "Fault without a conversation, logged only");
            return false;
        };

        warn!(
            chat_id = %event.conversation_id,
            user_id = event.user_id(),
            message_id = %event.id,
            error = %fault,
            "Event caused error"
        );

        match self
            .bot
            .send_message(event.conversation_id, self.messages.fault_fallback)
            .await
        {
            Ok(()) => {
                info!(chat_id = %event.conversation_id, "Sent fault notice");
                true
            }
            Err(e) => {
                error!(
                    chat_id = %event.conversation_id,
                    error = %e,
                    "Failed to send fault notice"
                );
                false
            }
        }
    }
}
