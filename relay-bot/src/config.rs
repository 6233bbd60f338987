//! Application config: Gemini and Telegram settings plus locale and log file.

use llm_client::GeminiConfig;
use relay_core::Result;
use relay_handlers::Locale;
use relay_telegram::TelegramConfig;
use std::env;
use tracing::warn;

/// Log file used when `LOG_FILE` is unset.
pub const DEFAULT_LOG_FILE: &str = "logs/relay-bot.log";

/// Everything the bot needs at startup. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub gemini: GeminiConfig,
    pub telegram: TelegramConfig,
    /// BOT_LOCALE
    pub locale: Locale,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides TELEGRAM_BOT_TOKEN if provided.
    /// Fails with `ConfigMissing` when GEMINI_API_KEY is unset.
    pub fn load(token: Option<String>) -> Result<Self> {
        Self::from_lookup(token, |key| env::var(key).ok())
    }

    /// Load through `lookup` (env-like).
    pub fn from_lookup<F>(token: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini = GeminiConfig::from_lookup(&lookup)?;
        let telegram = TelegramConfig::from_lookup(token, &lookup);
        let locale = match lookup("BOT_LOCALE").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "Unknown BOT_LOCALE, using en");
                Locale::En
            }),
            None => Locale::En,
        };

        Ok(Self {
            gemini,
            telegram,
            locale,
            log_file: log_file_from_lookup(&lookup),
        })
    }

    /// Validate URLs of both collaborators.
    pub fn validate(&self) -> Result<()> {
        self.gemini.validate()?;
        self.telegram.validate()
    }
}

/// LOG_FILE or [`DEFAULT_LOG_FILE`]. Read on its own so logging can start before the rest of the config.
pub fn log_file_from_lookup<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("LOG_FILE")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}
