//! # relay-core
//!
//! Core types and traits for the relay bot: [`InboundEvent`], [`OutboundReply`], [`Handler`], [`Bot`],
//! error types and tracing initialization. Transport-agnostic; used by command-router, relay-handlers
//! and relay-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{RelayError, Result};
pub use logger::init_tracing;
pub use types::{
    ConversationId, Handler, HandlerResponse, InboundEvent, OutboundReply, ToInboundEvent, User,
};
