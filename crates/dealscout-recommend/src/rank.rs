//! Page-scoped ranking and best-match flagging.

use crate::types::RankedProduct;

const BEST_MATCH_COUNT: usize = 3;

/// Sorts a page descending by normalized fit score and flags the top three
/// entries as best matches (fewer if the page is shorter).
///
/// The sort is stable: products with equal scores keep their prior relative
/// order, which is the provider's relevance order for a fresh page.
#[must_use]
pub fn rank(mut products: Vec<RankedProduct>) -> Vec<RankedProduct> {
    products.sort_by(|a, b| {
        b.fit_score
            .partial_cmp(&a.fit_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for product in products.iter_mut().take(BEST_MATCH_COUNT) {
        product.is_best_match = true;
    }

    products
}
