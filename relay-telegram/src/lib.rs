//! # relay-telegram
//!
//! Telegram layer: adapters from teloxide messages to [`relay_core::InboundEvent`], a
//! [`relay_core::Bot`] implementation, minimal config, and the dispatcher that feeds the command router.
//! No generation logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{split_message, TelegramBotAdapter, TELEGRAM_MAX_MESSAGE_LEN};
pub use config::TelegramConfig;
pub use runner::{process_event, run_dispatcher, Delivery, NotifyingErrorHandler};
