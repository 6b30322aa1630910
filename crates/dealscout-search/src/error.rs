use thiserror::Error;

/// Errors returned by the shopping-search client.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned an `"error"` field with a message.
    #[error("search provider error: {0}")]
    Api(String),

    /// The provider response carried no `shopping_results` collection.
    #[error("no shopping results found")]
    NoResults,

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SearchError {
    /// Returns `true` for errors worth one retry after a back-off delay:
    /// network-level failures (timeout, connection reset) and HTTP 5xx.
    /// Provider-level errors and malformed responses are not retried —
    /// repeating the identical request cannot fix them.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            SearchError::Http(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
            }
            SearchError::Api(_) | SearchError::NoResults | SearchError::Deserialize { .. } => false,
        }
    }
}
