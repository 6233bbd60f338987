//! # relay-bot
//!
//! Wires llm-client, relay-handlers, command-router and relay-telegram. Loads config from env and
//! runs the dispatcher.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::{log_file_from_lookup, BotConfig, DEFAULT_LOG_FILE};
pub use runner::{build_router, run_bot};
