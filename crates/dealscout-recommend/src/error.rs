use thiserror::Error;

use dealscout_search::SearchError;

/// Errors from the recommendation pipeline.
///
/// Per-product analysis failures never appear here — they degrade to
/// zero-score placeholders inside the analyzer. The pipeline can only fail
/// before any scoring happens.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The search provider failed or returned nothing usable. Callers
    /// surface this as "no products found" rather than a server fault.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// The provider answered, but nothing survived the budget and
    /// relevance filters.
    #[error("no products matched the query after filtering")]
    NoMatches,
}
