//! Gemini configuration loaded from the environment.

use relay_core::{RelayError, Result};
use std::env;

/// Gemini's OpenAI-compatible API root.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Model used when `GEMINI_MODEL` is unset.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Immutable generation settings, built once at startup.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// GEMINI_API_KEY
    pub api_key: String,
    /// GEMINI_BASE_URL
    pub base_url: String,
    /// GEMINI_MODEL
    pub model: String,
    /// GEMINI_TIMEOUT_SECS; `None` leaves the HTTP client without a timeout.
    pub timeout_secs: Option<u64>,
}

impl GeminiConfig {
    /// Load from environment variables. `GEMINI_API_KEY` is required.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load through `lookup` (env-like). Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("GEMINI_API_KEY").ok_or(RelayError::ConfigMissing("GEMINI_API_KEY"))?;
        let base_url = get("GEMINI_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());
        let model = get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
        let timeout_secs = match get("GEMINI_TIMEOUT_SECS") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                RelayError::Config(format!("GEMINI_TIMEOUT_SECS is not a number: {}", raw))
            })?),
            None => None,
        };

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout_secs,
        })
    }

    /// Builds a config for `api_key` with default URL and model.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            timeout_secs: None,
        }
    }

    /// Checks that the base URL parses.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.base_url).is_err() {
            return Err(RelayError::Config(format!(
                "GEMINI_BASE_URL is not a valid URL: {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GeminiConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "key")])).unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.timeout_secs, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_api_key() {
        let err = GeminiConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, RelayError::ConfigMissing("GEMINI_API_KEY")));

        let err = GeminiConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, RelayError::ConfigMissing("GEMINI_API_KEY")));
    }

    #[test]
    fn test_custom_values() {
        let config = GeminiConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "key"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_BASE_URL", "http://localhost:8080/v1/"),
            ("GEMINI_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.timeout_secs, Some(30));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = GeminiConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "key"),
            ("GEMINI_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
    }

    #[test]
    fn test_validate_invalid_base_url() {
        let mut config = GeminiConfig::with_api_key("key");
        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }
}
