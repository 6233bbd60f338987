//! Core types: conversation id, user, inbound event, outbound reply, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque conversation identifier (Telegram chat id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub i64);

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sender identity; only used for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

/// One received chat message. `text` is `None` for non-text content (photos, stickers, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    pub id: String,
    pub conversation_id: ConversationId,
    pub user: Option<User>,
    pub text: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl InboundEvent {
    /// Builds an event with an empty id, no sender and the current time.
    pub fn new(conversation_id: ConversationId, text: Option<String>) -> Self {
        Self {
            id: String::new(),
            conversation_id,
            user: None,
            text,
            received_at: Utc::now(),
        }
    }

    /// Returns the text if present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// Sender id or 0 when unknown (channel posts, anonymous admins).
    pub fn user_id(&self) -> i64 {
        self.user.as_ref().map(|u| u.id).unwrap_or(0)
    }

    /// Builds a reply addressed to this event's conversation.
    pub fn reply(&self, text: impl Into<String>) -> OutboundReply {
        OutboundReply {
            conversation_id: self.conversation_id,
            text: text.into(),
        }
    }
}

/// One message destined for a specific conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundReply {
    pub conversation_id: ConversationId,
    pub text: String,
}

/// Handler result. `Ignore` means no reply and no side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Deliver this reply to its conversation.
    Reply(OutboundReply),
    /// Nothing to send.
    Ignore,
}

impl HandlerResponse {
    /// Short name for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            HandlerResponse::Reply(_) => "Reply",
            HandlerResponse::Ignore => "Ignore",
        }
    }
}

/// Converts a transport-specific message type to a core [`InboundEvent`].
pub trait ToInboundEvent: Send + Sync {
    fn to_event(&self) -> InboundEvent;
}

/// Handles one inbound event. Handlers are stateless and shared across concurrent events.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, event: &InboundEvent) -> crate::error::Result<HandlerResponse>;
}
