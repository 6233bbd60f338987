//! Wraps teloxide::Bot and implements [`relay_core::Bot`]. Production code sends through Telegram; tests
//! substitute recording mocks or point the API URL at a mock server.

use async_trait::async_trait;
use relay_core::{Bot as CoreBot, ConversationId, RelayError, Result};
use teloxide::{prelude::*, types::ChatId};
use tracing::debug;

/// Telegram's limit for one text message. Counted here in bytes, which is never below the UTF-16 count
/// Telegram actually checks.
pub const TELEGRAM_MAX_MESSAGE_LEN: usize = 4096;

/// Largest char boundary `<= index`.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut i = index;
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Splits text into chunks of at most `max_len` bytes, preferring newlines, then spaces.
/// Chunks carry no trailing whitespace and blank chunks are dropped; Telegram rejects empty text.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    let text = text.trim_end();
    if max_len == 0 || text.is_empty() {
        return Vec::new();
    }
    if text.len() <= max_len {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        if remaining.len() <= max_len {
            chunks.push(remaining.to_string());
            break;
        }

        let mut window_end = floor_char_boundary(remaining, max_len);
        if window_end == 0 {
            window_end = remaining
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(remaining.len());
        }

        let window = &remaining[..window_end];
        let split_at = match window.rfind('\n').or_else(|| window.rfind(' ')) {
            Some(0) | None => window_end,
            Some(i) => i,
        };

        let chunk = remaining[..split_at].trim_end();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }
        remaining = remaining[split_at..].trim_start();
    }

    chunks
}

/// Thin wrapper around teloxide::Bot that implements relay-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    /// Sends `text`, split into several messages when it exceeds the Telegram limit.
    async fn send_message(&self, conversation_id: ConversationId, text: &str) -> Result<()> {
        let chunks = split_message(text, TELEGRAM_MAX_MESSAGE_LEN);
        let total = chunks.len();
        for (i, chunk) in chunks.into_iter().enumerate() {
            self.bot
                .send_message(ChatId(conversation_id.0), chunk)
                .await
                .map_err(|e| RelayError::Bot(e.to_string()))?;
            debug!(chat_id = %conversation_id, part = i + 1, total, "Sent message part");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_short_message() {
        assert_eq!(split_message("hello", 100), vec!["hello"]);
    }

    #[test]
    fn test_split_at_newline() {
        let chunks = split_message("line1\nline2\nline3", 10);
        assert_eq!(chunks, vec!["line1", "line2", "line3"]);
    }

    #[test]
    fn test_split_at_space() {
        let chunks = split_message("hello world foo bar", 10);
        assert_eq!(chunks, vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn test_split_without_whitespace() {
        let chunks = split_message("abcdefghij", 4);
        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_split_respects_utf8_boundary() {
        let text = format!("{}лz", "a".repeat(4095));
        let chunks = split_message(&text, TELEGRAM_MAX_MESSAGE_LEN);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 4095);
        assert_eq!(chunks[1], "лz");
    }

    #[test]
    fn test_split_drops_blank_chunks() {
        assert!(split_message(&" ".repeat(5000), TELEGRAM_MAX_MESSAGE_LEN).is_empty());
        assert!(split_message(" \n\t ", 10).is_empty());

        let text = format!("a{}b", " ".repeat(5000));
        let chunks = split_message(&text, TELEGRAM_MAX_MESSAGE_LEN);
        assert_eq!(chunks, vec!["a", "b"]);
    }

    #[test]
    fn test_split_trims_chunk_ends() {
        let text = format!("{}   \n{}", "a".repeat(8), "b".repeat(4));
        let chunks = split_message(&text, 10);
        assert_eq!(chunks, vec!["aaaaaaaa", "bbbb"]);
        assert!(chunks.iter().all(|c| !c.trim().is_empty() && c.len() <= 10));
    }

    #[test]
    fn test_split_zero_limit() {
        assert!(split_message("text", 0).is_empty());
    }
}
