//! Minimal Telegram config: bot token and optional API URL.

use relay_core::{RelayError, Result};
use std::env;

/// Telegram connection settings.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// TELEGRAM_BOT_TOKEN (or BOT_TOKEN); `None` until checked at bot start.
    pub bot_token: Option<String>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Load from environment variables. `token` overrides TELEGRAM_BOT_TOKEN when given.
    pub fn from_env(token: Option<String>) -> Self {
        Self::from_lookup(token, |key| env::var(key).ok())
    }

    /// Load through `lookup` (env-like). Blank values count as unset.
    pub fn from_lookup<F>(token: Option<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let bot_token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| get("TELEGRAM_BOT_TOKEN"))
            .or_else(|| get("BOT_TOKEN"));
        let telegram_api_url = get("TELEGRAM_API_URL").or_else(|| get("TELOXIDE_API_URL"));
        Self {
            bot_token,
            telegram_api_url,
        }
    }

    /// Uses the given token, default API URL.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token: Some(bot_token),
            telegram_api_url: None,
        }
    }

    /// The token, or [`RelayError::ConfigMissing`] when absent.
    pub fn require_token(&self) -> Result<&str> {
        self.bot_token
            .as_deref()
            .ok_or(RelayError::ConfigMissing("TELEGRAM_BOT_TOKEN"))
    }

    /// Checks that the API URL, if set, parses.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(RelayError::Config(format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                )));
            }
        }
        Ok(())
    }

    /// Builds the teloxide bot; fails when the token is missing or the API URL is invalid.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let token = self.require_token()?;
        self.validate()?;
        let bot = teloxide::Bot::new(token);
        match &self.telegram_api_url {
            Some(url) => {
                let url = reqwest::Url::parse(url).map_err(|e| RelayError::Config(e.to_string()))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
