//! HTTP client for the shopping-search provider.
//!
//! Wraps `reqwest` with provider-specific error handling, API key
//! management, and typed response deserialization. The provider signals
//! failures with an `"error"` field in the JSON body; those surface as
//! [`SearchError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};

use dealscout_core::{retry_with_backoff, ProductRecord, SearchPreferences};

use crate::error::SearchError;
use crate::normalize::normalize_results;
use crate::types::ShoppingResponse;

const DEFAULT_BASE_URL: &str = "https://serpapi.com/";
const SHOPPING_ENGINE: &str = "google_shopping";

/// Client for the shopping-search provider.
///
/// Manages the HTTP client, API key, base URL, and retry policy. Use
/// [`SearchClient::new`] for production or [`SearchClient::with_base_url`]
/// to point at a mock server in tests.
pub struct SearchClient {
    client: Client,
    api_key: String,
    base_url: Url,
    currency: String,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl SearchClient {
    /// Creates a new client pointed at the production search provider.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, currency: &str, timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, currency, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        currency: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("dealscout/0.1 (product-recommendations)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining the endpoint path appends rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| SearchError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            currency: currency.to_owned(),
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

    /// Searches for products matching `query` within the given budget.
    ///
    /// Issues one GET to the `google_shopping` engine with the query text,
    /// a result-count hint, the budget as a `price=min..max` range filter,
    /// and the currency unit. The full returned result set is then filtered
    /// against the budget and the `max_position` relevance cutoff before
    /// normalization — so the returned length is the authoritative count of
    /// all eligible matches.
    ///
    /// Transient failures (timeout, connect, 5xx) are retried once with
    /// back-off; everything else is attempted exactly once.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Api`] if the provider reports an error.
    /// - [`SearchError::NoResults`] if the response has no result collection.
    /// - [`SearchError::Http`] on network failure or non-2xx HTTP status.
    /// - [`SearchError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search(
        &self,
        query: &str,
        preferences: &SearchPreferences,
        num_results: u32,
        max_position: u32,
    ) -> Result<Vec<ProductRecord>, SearchError> {
        let budget = preferences.budget;
        let url = self.build_url(query, budget, num_results)?;

        let body = retry_with_backoff(
            self.max_retries,
            self.backoff_base_ms,
            SearchError::is_transient,
            || self.request_json(&url),
        )
        .await?;

        Self::check_api_error(&body)?;

        let response: ShoppingResponse =
            serde_json::from_value(body).map_err(|e| SearchError::Deserialize {
                context: format!("search(query={query})"),
                source: e,
            })?;

        let items = response.shopping_results.ok_or(SearchError::NoResults)?;
        let total_returned = items.len();
        let records = normalize_results(items, budget, max_position);
        tracing::debug!(
            query,
            total_returned,
            eligible = records.len(),
            "shopping search completed"
        );
        Ok(records)
    }

    /// Builds the full request URL with properly percent-encoded query parameters.
    fn build_url(&self, query: &str, budget: [f64; 2], num_results: u32) -> Result<Url, SearchError> {
        let mut url = self
            .base_url
            .join("search.json")
            .map_err(|e| SearchError::Api(format!("invalid endpoint URL: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("engine", SHOPPING_ENGINE);
            pairs.append_pair("q", query);
            pairs.append_pair("num", &num_results.to_string());
            pairs.append_pair("price", &format!("{}..{}", budget[0], budget[1]));
            pairs.append_pair("currency", &self.currency);
            pairs.append_pair("api_key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, SearchError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
            context: url.path().to_owned(),
            source: e,
        })
    }

    /// Checks the top-level `"error"` field and returns an error if present.
    fn check_api_error(body: &serde_json::Value) -> Result<(), SearchError> {
        if let Some(msg) = body.get("error").and_then(serde_json::Value::as_str) {
            return Err(SearchError::Api(msg.to_owned()));
        }
        Ok(())
    }
}
