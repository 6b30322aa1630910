//! Per-product fit analysis with zero-score degradation.

use futures::future::join_all;
use serde::Deserialize;

use dealscout_core::{ProductRecord, SearchPreferences};

use crate::client::CompletionClient;
use crate::prompt::build_prompt;
use crate::types::FitAnalysis;

const FALLBACK_EXPLANATION: &str = "Error generating fit score";
const MAX_PROS_CONS: usize = 3;

/// Loose shape of the JSON object the model is asked to return. Every key
/// is optional so a partially-correct reply still yields something usable.
#[derive(Debug, Default, Deserialize)]
struct RawAnalysis {
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    pros: Option<Vec<String>>,
    #[serde(default)]
    cons: Option<Vec<String>>,
}

/// Scores one product against the user's preferences.
///
/// Infallible by contract: a provider failure or an unparseable completion
/// degrades to the zero-score fallback analysis so that one bad product can
/// never abort the rest of its batch.
pub async fn analyze(
    client: &CompletionClient,
    product: &ProductRecord,
    preferences: &SearchPreferences,
) -> FitAnalysis {
    let prompt = build_prompt(product, preferences);

    let content = match client.complete(&prompt).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(product = %product.name, error = %e, "fit-score completion failed");
            return FitAnalysis::fallback(FALLBACK_EXPLANATION);
        }
    };

    match parse_analysis(&content) {
        Some(analysis) => analysis,
        None => {
            tracing::warn!(
                product = %product.name,
                "could not parse a fit-score JSON object out of the completion"
            );
            FitAnalysis::fallback(FALLBACK_EXPLANATION)
        }
    }
}

/// Scores every product on a page concurrently.
///
/// Analyses are independent of each other; the whole batch is awaited
/// together and the output order (and length) always matches the input.
pub async fn analyze_page(
    client: &CompletionClient,
    products: &[ProductRecord],
    preferences: &SearchPreferences,
) -> Vec<FitAnalysis> {
    join_all(
        products
            .iter()
            .map(|product| analyze(client, product, preferences)),
    )
    .await
}

/// Pulls a [`FitAnalysis`] out of free-form completion text.
///
/// Models occasionally wrap the requested JSON in prose or code fences, so
/// parsing targets the outermost `{…}` span rather than the whole reply.
/// The score is clamped to `[0, 10]` and rounded; pros and cons are
/// truncated to three entries each.
fn parse_analysis(content: &str) -> Option<FitAnalysis> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if start >= end {
        return None;
    }

    let raw: RawAnalysis = serde_json::from_str(&content[start..=end]).ok()?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = raw
        .score
        .filter(|s| s.is_finite())
        .map_or(0, |s| s.clamp(0.0, 10.0).round() as u8);

    let mut pros = raw.pros.unwrap_or_default();
    pros.truncate(MAX_PROS_CONS);
    let mut cons = raw.cons.unwrap_or_default();
    cons.truncate(MAX_PROS_CONS);

    Some(FitAnalysis {
        score,
        explanation: raw.explanation.unwrap_or_else(|| "N/A".to_owned()),
        pros,
        cons,
    })
}
