use thiserror::Error;

/// Errors from the chat-completion client.
///
/// These never escape the analyzer: [`crate::analyze`] converts every
/// variant into the zero-score fallback analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The completion response carried no usable choice content.
    #[error("completion response had no choices")]
    EmptyCompletion,

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// The configured base URL does not form a valid endpoint.
    #[error("invalid completion endpoint: {0}")]
    InvalidEndpoint(String),
}

impl AnalyzerError {
    /// Transient errors worth one retry: timeouts, connection failures,
    /// and HTTP 5xx. A malformed or empty completion is not retried.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            AnalyzerError::Http(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
            }
            AnalyzerError::EmptyCompletion
            | AnalyzerError::Deserialize(_)
            | AnalyzerError::InvalidEndpoint(_) => false,
        }
    }
}
