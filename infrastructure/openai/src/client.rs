use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared OpenAI HTTP client configuration.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: String) -> Result<Self, reqwest::Error> {
        Self::with_settings(api_key, DEFAULT_BASE_URL.to_string(), DEFAULT_TIMEOUT)
    }

    /// Builds a client against a custom endpoint. Every request is bounded
    /// by `timeout`; a client without it is never handed out.
    pub fn with_settings(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the responses endpoint URL.
    pub fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url)
    }
}
