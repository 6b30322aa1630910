//! Budget/relevance filtering and normalization of raw shopping results.

use dealscout_core::{ProductRecord, NOT_AVAILABLE};

use crate::types::ShoppingItem;

/// Filters raw results against the budget and relevance cutoff, then maps
/// the survivors into uniform [`ProductRecord`]s.
///
/// A record survives only if:
/// - the provider parsed a finite numeric price for it,
/// - that price is within the inclusive `[min, max]` budget, and
/// - it has a relevance `position` of at most `max_position`.
///
/// This runs over the FULL result set returned by the provider, so the
/// caller's total-product count reflects every eligible match, not just the
/// page that ends up being scored. Relative provider order is preserved.
#[must_use]
pub fn normalize_results(
    items: Vec<ShoppingItem>,
    budget: [f64; 2],
    max_position: u32,
) -> Vec<ProductRecord> {
    let [min, max] = budget;
    items
        .into_iter()
        .filter(|item| {
            let in_budget = item
                .extracted_price
                .is_some_and(|p| p.is_finite() && p >= min && p <= max);
            let relevant = item.position.is_some_and(|pos| pos <= max_position);
            in_budget && relevant
        })
        .map(normalize_item)
        .collect()
}

/// Maps one surviving raw record into a [`ProductRecord`], substituting the
/// `"N/A"` sentinel for any missing display field. The canonical link
/// prefers `product_link` over the plain `link`.
fn normalize_item(item: ShoppingItem) -> ProductRecord {
    let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_owned());

    ProductRecord {
        name: or_na(item.title),
        price: or_na(item.price),
        extracted_price: item.extracted_price.unwrap_or(0.0),
        rating: item.rating,
        reviews: item.reviews,
        image: or_na(item.thumbnail),
        link: or_na(item.product_link.or(item.link)),
        description: or_na(item.snippet),
        source: or_na(item.source),
        position: item.position.unwrap_or(0),
    }
}
