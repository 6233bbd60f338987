//! # relay-handlers
//!
//! Handlers behind the command router: [`RelayHandler`] forwards free text to the LLM,
//! [`StaticReplyHandler`] answers `/start` and `/help`, and [`FaultNotifier`] turns delivery faults into
//! a generic message. All user-facing texts come from [`BotMessages`].

mod fault_notifier;
mod messages;
mod relay_handler;
mod static_reply;

pub use fault_notifier::FaultNotifier;
pub use messages::{BotMessages, Locale};
pub use relay_handler::RelayHandler;
pub use static_reply::StaticReplyHandler;
