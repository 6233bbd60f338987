//! Bot abstraction for delivering replies.
//!
//! [`Bot`] is transport-agnostic; relay-telegram implements it over teloxide, tests substitute recording mocks.

use crate::error::Result;
use crate::types::{ConversationId, OutboundReply};
use async_trait::async_trait;

/// Sends text to a conversation. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given conversation.
    async fn send_message(&self, conversation_id: ConversationId, text: &str) -> Result<()>;

    /// Delivers a reply produced by a handler.
    async fn send_reply(&self, reply: &OutboundReply) -> Result<()> {
        self.send_message(reply.conversation_id, &reply.text).await
    }
}
