//! Raw shopping-search provider response types.
//!
//! These model the JSON the SerpApi `google_shopping` engine actually
//! returns. Every field a result record may omit is `Option` with
//! `#[serde(default)]`; normalization (not deserialization) decides what
//! missing fields mean.

use serde::Deserialize;

/// Top-level search response.
///
/// A provider-level failure puts a message in `error`; a successful query
/// carries the result collection in `shopping_results`. Both are optional
/// because the provider never sends both.
#[derive(Debug, Deserialize)]
pub struct ShoppingResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub shopping_results: Option<Vec<ShoppingItem>>,
}

/// One raw shopping result record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShoppingItem {
    #[serde(default)]
    pub title: Option<String>,
    /// Display price string, e.g. `"$1,299.00"`.
    #[serde(default)]
    pub price: Option<String>,
    /// Numeric price pre-parsed by the provider from the display string.
    #[serde(default)]
    pub extracted_price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<i64>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Canonical product page URL. Preferred over `link` when both exist.
    #[serde(default)]
    pub product_link: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// The provider's relevance rank, 1-based.
    #[serde(default)]
    pub position: Option<u32>,
}
