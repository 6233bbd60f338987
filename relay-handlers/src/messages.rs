//! Fixed user-facing texts per locale.

use std::fmt;
use std::str::FromStr;

/// Language of the fixed bot texts (`BOT_LOCALE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    /// Indonesian.
    Id,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::En),
            "id" | "id-id" | "in" | "indonesian" => Ok(Locale::Id),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Id => write!(f, "id"),
        }
    }
}

/// The four fixed texts the bot can send without asking the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMessages {
    /// Reply to `/start`.
    pub welcome: &'static str,
    /// Reply to `/help`.
    pub help: &'static str,
    /// Sent when the model call fails.
    pub generation_fallback: &'static str,
    /// Sent when routing or delivery fails.
    pub fault_fallback: &'static str,
}

const EN: BotMessages = BotMessages {
    welcome: "Hello! I am a Telegram bot powered by the Gemini API. \
              Send me a message and I will try to answer it!",
    help: "I can answer your questions. Just type your message.",
    generation_fallback: "Sorry, I had trouble processing your request. Please try again later.",
    fault_fallback: "An error occurred. Please try again.",
};

const ID: BotMessages = BotMessages {
    welcome: "Halo! Saya adalah bot Telegram yang ditenagai oleh Gemini API. \
              Kirimkan saya pesan dan saya akan mencoba menjawabnya!",
    help: "Saya bisa menjawab pertanyaan Anda. Cukup ketik pesan Anda.",
    generation_fallback: "Maaf, saya mengalami masalah saat memproses permintaan Anda. \
                          Silakan coba lagi nanti.",
    fault_fallback: "Terjadi kesalahan. Silakan coba lagi.",
};

impl BotMessages {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => EN,
            Locale::Id => ID,
        }
    }
}

impl Default for BotMessages {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
