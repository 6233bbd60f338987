//! Message pipeline: forwards the text of an event to the LLM and turns the outcome into a reply.

use async_trait::async_trait;
use llm_client::LlmClient;
use relay_core::{Handler, HandlerResponse, InboundEvent, Result};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::messages::BotMessages;

/// Sends the raw event text as the only prompt; one call per event, no retry.
/// Generation failures become the fallback text and never leave this handler.
pub struct RelayHandler {
    llm_client: Arc<dyn LlmClient>,
    messages: BotMessages,
}

impl RelayHandler {
    pub fn new(llm_client: Arc<dyn LlmClient>, messages: BotMessages) -> Self {
        Self {
            llm_client,
            messages,
        }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, event), fields(chat_id = %event.conversation_id))]
    async fn handle(&self, event: &InboundEvent) -> Result<HandlerResponse> {
        let Some(text) = event.text() else {
            debug!(
                user_id = event.user_id(),
                message_id = %event.id,
                "Message has no text, ignored"
            );
            return Ok(HandlerResponse::Ignore);
        };

        info!(
            user_id = event.user_id(),
            message_content = %text,
            "Received message"
        );

        match self.llm_client.generate(text).await {
            Ok(reply) => {
                info!(reply_len = reply.len(), reply = %reply, "LLM responded");
                Ok(HandlerResponse::Reply(event.reply(reply)))
            }
            Err(e) => {
                error!(
                    user_id = event.user_id(),
                    error = %e,
                    "Error communicating with LLM"
                );
                Ok(HandlerResponse::Reply(
                    event.reply(self.messages.generation_fallback),
                ))
            }
        }
    }
}
