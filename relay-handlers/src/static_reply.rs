//! Fixed-text responder for reserved commands.

use async_trait::async_trait;
use relay_core::{Handler, HandlerResponse, InboundEvent, Result};
use tracing::info;

/// Replies with the same text to every event it is routed; never calls out.
pub struct StaticReplyHandler {
    name: &'static str,
    text: &'static str,
}

impl StaticReplyHandler {
    pub fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }

    /// `/start` responder.
    pub fn welcome(messages: &crate::BotMessages) -> Self {
        Self::new("start", messages.welcome)
    }

    /// `/help` responder.
    pub fn help(messages: &crate::BotMessages) -> Self {
        Self::new("help", messages.help)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

#[async_trait]
impl Handler for StaticReplyHandler {
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        info!(
            chat_id = %event.conversation_id,
            user_id = event.user_id(),
            command = %self.name,
            "Sending static reply"
        );
        Ok(HandlerResponse::Reply(event.reply(self.text)))
    }
}
