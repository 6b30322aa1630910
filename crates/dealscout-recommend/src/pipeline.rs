//! Recommendation pipeline orchestration.

use dealscout_analyzer::{analyze_page, CompletionClient};
use dealscout_core::SearchPreferences;
use dealscout_search::SearchClient;

use crate::error::RecommendError;
use crate::paginate::{paginate, total_pages};
use crate::rank::rank;
use crate::types::{PageResult, RankedProduct};

/// A validated recommendation request.
///
/// `page` is 1-based and `page_size` positive; the server clamps both
/// before constructing this.
#[derive(Debug, Clone)]
pub struct RecommendRequest {
    pub query: String,
    pub preferences: SearchPreferences,
    pub page: usize,
    pub page_size: usize,
}

/// Runs the full recommendation pipeline for one request.
///
/// 1. Fetch shopping results and filter them against the budget and the
///    relevance-position cutoff (over the full result set, so the total
///    count is authoritative).
/// 2. Slice out the requested page window — before any scoring, so LLM
///    cost is paid only for this page.
/// 3. Score every product on the page concurrently; individual failures
///    degrade to zero-score placeholders and never abort the batch.
/// 4. Rank the page descending by fit score (stable) and flag the top
///    three as best matches.
/// 5. Assemble the page with pagination metadata derived from the
///    pre-pagination total.
///
/// # Errors
///
/// Returns [`RecommendError::Search`] if the search provider fails and
/// [`RecommendError::NoMatches`] if nothing survives filtering. Both are
/// surfaced to clients as "no products found".
pub async fn recommend(
    search: &SearchClient,
    analyzer: &CompletionClient,
    request: &RecommendRequest,
    num_results: u32,
    max_position: u32,
) -> Result<PageResult, RecommendError> {
    let all_products = search
        .search(
            &request.query,
            &request.preferences,
            num_results,
            max_position,
        )
        .await?;

    if all_products.is_empty() {
        return Err(RecommendError::NoMatches);
    }

    let total_products = all_products.len();
    let page_products = paginate(&all_products, request.page, request.page_size).to_vec();

    tracing::debug!(
        query = %request.query,
        total_products,
        page = request.page,
        page_len = page_products.len(),
        "scoring page"
    );

    let analyses = analyze_page(analyzer, &page_products, &request.preferences).await;

    let analyzed: Vec<RankedProduct> = page_products
        .into_iter()
        .zip(analyses)
        .map(|(product, analysis)| RankedProduct::new(product, analysis))
        .collect();

    Ok(PageResult {
        products: rank(analyzed),
        total_products,
        current_page: request.page,
        total_pages: total_pages(total_products, request.page_size),
    })
}

/// Convenience for callers that surface pipeline failures as a not-found
/// message keyed on the query text.
#[must_use]
pub fn no_match_message(query: &str) -> String {
    format!("No products found matching: {query}")
}
