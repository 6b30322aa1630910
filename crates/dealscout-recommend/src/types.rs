//! Ranked-page response types.

use serde::Serialize;

use dealscout_analyzer::FitAnalysis;
use dealscout_core::ProductRecord;

/// A product with its fit analysis attached, as sent to the client.
///
/// Product fields are flattened to the top level next to the analysis
/// fields, matching the inbound API contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedProduct {
    #[serde(flatten)]
    pub product: ProductRecord,
    /// Fit score normalized to `[0.0, 1.0]`.
    pub fit_score: f64,
    pub score_explanation: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// Set on the top three entries of the ranked page.
    pub is_best_match: bool,
}

impl RankedProduct {
    #[must_use]
    pub fn new(product: ProductRecord, analysis: FitAnalysis) -> Self {
        Self {
            product,
            fit_score: analysis.fit_score(),
            score_explanation: analysis.explanation,
            pros: analysis.pros,
            cons: analysis.cons,
            is_best_match: false,
        }
    }
}

/// One ranked page plus pagination metadata.
///
/// `total_products` counts ALL budget-and-relevance-eligible results, not
/// just the scored page, and `total_pages` is derived from that count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub products: Vec<RankedProduct>,
    pub total_products: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> ProductRecord {
        ProductRecord {
            name: "Laptop".to_owned(),
            price: "$899.00".to_owned(),
            extracted_price: 899.0,
            rating: Some(4.5),
            reviews: Some(12),
            image: "N/A".to_owned(),
            link: "https://shop.example.com/p".to_owned(),
            description: "desc".to_owned(),
            source: "Store".to_owned(),
            position: 1,
        }
    }

    #[test]
    fn ranked_product_serializes_flattened_with_camel_case_keys() {
        let analysis = FitAnalysis {
            score: 8,
            explanation: "Good fit".to_owned(),
            pros: vec!["cheap".to_owned()],
            cons: vec![],
        };
        let ranked = RankedProduct::new(sample_product(), analysis);
        let json = serde_json::to_value(&ranked).expect("serialize");

        // Product fields at the top level, not nested under "product".
        assert_eq!(json["name"], "Laptop");
        assert_eq!(json["extractedPrice"], 899.0);
        assert_eq!(json["fitScore"], 0.8);
        assert_eq!(json["scoreExplanation"], "Good fit");
        assert_eq!(json["isBestMatch"], false);
        assert!(json.get("product").is_none());
    }

    #[test]
    fn page_result_serializes_pagination_metadata() {
        let page = PageResult {
            products: vec![],
            total_products: 7,
            current_page: 2,
            total_pages: 2,
        };
        let json = serde_json::to_value(&page).expect("serialize");
        assert_eq!(json["totalProducts"], 7);
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["totalPages"], 2);
    }
}
