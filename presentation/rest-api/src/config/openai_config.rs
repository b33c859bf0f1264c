use std::time::Duration;

use openai::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use super::error::ConfigError;

/// Configuration for OpenAI API access.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Environment variables:
    /// - OPENAI_API_KEY: provider credential (required)
    /// - OPENAI_BASE_URL: API root (default: "https://api.openai.com/v1")
    /// - OPENAI_TIMEOUT_SECS: per request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingVariable("OPENAI_API_KEY"))?;

        let base_url = lookup("OPENAI_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match lookup("OPENAI_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidVariable {
                    name: "OPENAI_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }
}
