//! Gemini implementation of [`LlmClient`] over the OpenAI-compatible chat-completions API.

use std::sync::Arc;
use std::time::Duration;

use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use super::{mask_token, GeminiConfig, GenerationError, LlmClient};

/// Backoff that gives up on the first transient error, so a 429 surfaces instead of being retried.
fn no_retry_backoff() -> backoff::ExponentialBackoff {
    backoff::ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

/// Gemini chat client. Built once from [`GeminiConfig`]; cheap to clone.
#[derive(Clone)]
pub struct GeminiLlmClient {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    /// Kept only for masked logging.
    api_key: String,
}

impl GeminiLlmClient {
    /// Builds the client: API key, base URL, optional HTTP timeout, retries disabled.
    pub fn new(config: &GeminiConfig) -> Result<Self, GenerationError> {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.clone())
            .with_api_base(config.base_url.clone());

        let mut http = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            http = http.timeout(Duration::from_secs(secs));
        }
        let http = http
            .build()
            .map_err(|e| GenerationError::InvalidRequest(e.to_string()))?;

        let client = Client::with_config(openai_config)
            .with_http_client(http)
            .with_backoff(no_retry_backoff());

        info!(
            model = %config.model,
            base_url = %config.base_url,
            api_key = %mask_token(&config.api_key),
            timeout_secs = ?config.timeout_secs,
            "Gemini client configured"
        );

        Ok(Self {
            client: Arc::new(client),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Model name sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for GeminiLlmClient {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?
            .into();
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(vec![message])
            .build()?;

        debug!(api_key = %mask_token(&self.api_key), "Gemini chat_completion request");

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "Gemini chat_completion usage"
            );
        }

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}
