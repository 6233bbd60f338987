//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait (one prompt in, one reply out) and a Gemini implementation that talks
//! to Gemini's OpenAI-compatible chat-completions endpoint through async-openai.

use async_trait::async_trait;
use thiserror::Error;

mod config;
mod gemini_llm;

pub use config::{GeminiConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use gemini_llm::GeminiLlmClient;

/// Why a generation call produced no reply text.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Transport, HTTP status, quota or response decoding failure.
    #[error("Generation request failed: {0}")]
    Request(#[from] async_openai::error::OpenAIError),

    /// The model answered without any text (no choices, or blocked/empty content).
    #[error("Model returned no content")]
    EmptyResponse,

    /// The client could not be built or the request could not be formed.
    #[error("Invalid generation request: {0}")]
    InvalidRequest(String),
}

/// Text-generation collaborator: sends `prompt` as the only user message and returns the reply text.
/// Exactly one upstream request per call; no retries.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Masks an API key for logging: first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" so no part of a short key leaks.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}
