//! HTTP client for the OpenAI-compatible chat-completion provider.

use std::time::Duration;

use reqwest::{Client, Url};

use dealscout_core::retry_with_backoff;

use crate::error::AnalyzerError;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/";
const COMPLETIONS_PATH: &str = "openai/v1/chat/completions";

/// Sampling and output-length settings for completion requests.
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Client for the chat-completion provider.
///
/// Use [`CompletionClient::new`] for production or
/// [`CompletionClient::with_base_url`] to point at a mock server in tests.
pub struct CompletionClient {
    client: Client,
    api_key: String,
    base_url: Url,
    settings: CompletionSettings,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl CompletionClient {
    /// Creates a new client pointed at the production completion provider.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        settings: CompletionSettings,
        timeout_secs: u64,
    ) -> Result<Self, AnalyzerError> {
        Self::with_base_url(api_key, settings, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AnalyzerError::InvalidEndpoint`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        settings: CompletionSettings,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, AnalyzerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("dealscout/0.1 (product-recommendations)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| AnalyzerError::InvalidEndpoint(format!("'{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            settings,
            max_retries: 1,
            backoff_base_ms: 500,
        })
    }

    /// Overrides the default single-retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Sends one completion request with a single user-role message and
    /// returns the first choice's content.
    ///
    /// Transient failures (timeout, connect, 5xx) are retried once with
    /// back-off.
    ///
    /// # Errors
    ///
    /// - [`AnalyzerError::Http`] on network failure or non-2xx HTTP status.
    /// - [`AnalyzerError::EmptyCompletion`] if the response has no choices
    ///   or the first choice has no content.
    /// - [`AnalyzerError::Deserialize`] if the response body does not match
    ///   the expected shape.
    pub async fn complete(&self, prompt: &str) -> Result<String, AnalyzerError> {
        retry_with_backoff(
            self.max_retries,
            self.backoff_base_ms,
            AnalyzerError::is_transient,
            || self.complete_once(prompt),
        )
        .await
    }

    async fn complete_once(&self, prompt: &str) -> Result<String, AnalyzerError> {
        let url = self
            .base_url
            .join(COMPLETIONS_PATH)
            .map_err(|e| AnalyzerError::InvalidEndpoint(e.to_string()))?;

        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&body)?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AnalyzerError::EmptyCompletion)
    }
}
