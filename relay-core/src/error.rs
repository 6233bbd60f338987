//! Error types for the relay core.
//!
//! [`RelayError`] covers configuration and transport faults. Generation failures have their own type in
//! llm-client and never reach this level.

use thiserror::Error;

/// Top-level error for the relay bot.
#[derive(Error, Debug)]
pub enum RelayError {
    /// A required configuration value is absent (holds the variable name).
    #[error("Missing configuration: {0} not set")]
    ConfigMissing(&'static str),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;
