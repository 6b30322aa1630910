//! Scoring prompt construction.

use dealscout_core::{ProductRecord, SearchPreferences};

/// Builds the natural-language scoring prompt for one product.
///
/// Embeds the full serialized product record and the user's budget bounds
/// and feature list, and pins the expected reply shape with a worked JSON
/// example so the model answers with a parseable object.
#[must_use]
pub fn build_prompt(product: &ProductRecord, preferences: &SearchPreferences) -> String {
    let product_json =
        serde_json::to_string(product).unwrap_or_else(|_| String::from("{}"));

    format!(
        r#"You are an AI product analyst. Given the following product details and user preferences, analyze the product to provide a fit score from 1 to 10 and summarize up to 3 pros and 3 cons.

Product: {product_json}
User Preferences:
- Budget Range: ${budget_min} - ${budget_max}
- Desired Features: {features}

Consider the following factors when calculating the fit score:
1. How well the product's price fits within the user's budget range
2. How many of the user's desired features are present or relevant to the product
3. The overall quality and ratings of the product

Respond in a JSON format with the keys "score", "explanation", "pros", and "cons". For example:
{{
    "score": 8,
    "explanation": "This product matches most of the user's preferences. It's within the budget and has several desired features, but lacks some specific functionalities.",
    "pros": ["Within budget", "Matches most desired features", "High overall quality"],
    "cons": ["Missing some specific desired features", "At the higher end of the budget range", "May have more features than needed, increasing cost"]
}}"#,
        budget_min = preferences.budget_min(),
        budget_max = preferences.budget_max(),
        features = preferences.features.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> ProductRecord {
        ProductRecord {
            name: "Acme Laptop 15".to_owned(),
            price: "$899.00".to_owned(),
            extracted_price: 899.0,
            rating: Some(4.4),
            reviews: Some(321),
            image: "https://img.example.com/acme.jpg".to_owned(),
            link: "https://shop.example.com/acme-15".to_owned(),
            description: "Slim 15-inch laptop".to_owned(),
            source: "Example Store".to_owned(),
            position: 2,
        }
    }

    #[test]
    fn prompt_embeds_product_and_preferences() {
        let prefs = SearchPreferences {
            budget: [500.0, 1500.0],
            features: vec!["performance".to_owned(), "battery".to_owned()],
        };
        let prompt = build_prompt(&sample_product(), &prefs);

        assert!(prompt.contains("Acme Laptop 15"));
        assert!(prompt.contains("$500 - $1500"));
        assert!(prompt.contains("performance, battery"));
        assert!(prompt.contains(r#""score", "explanation", "pros", and "cons""#));
    }

    #[test]
    fn prompt_serializes_product_with_wire_field_names() {
        let prefs = SearchPreferences {
            budget: [0.0, 100.0],
            features: vec![],
        };
        let prompt = build_prompt(&sample_product(), &prefs);
        assert!(
            prompt.contains(r#""extractedPrice":899.0"#),
            "product JSON should use wire names: {prompt}"
        );
    }
}
