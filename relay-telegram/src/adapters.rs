//! Adapters from Telegram (teloxide) types to relay_core types.

use relay_core::{ConversationId, InboundEvent, ToInboundEvent, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_user(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
        }
    }
}

/// Wraps a teloxide Message for conversion to [`InboundEvent`]. Non-text messages keep `text: None`.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToInboundEvent for TelegramMessageWrapper<'a> {
    fn to_event(&self) -> InboundEvent {
        InboundEvent {
            id: self.0.id.to_string(),
            conversation_id: ConversationId(self.0.chat.id.0),
            user: self.0.from.as_ref().map(|u| TelegramUserWrapper(u).to_user()),
            text: self.0.text().map(str::to_string),
            received_at: self.0.date,
        }
    }
}
