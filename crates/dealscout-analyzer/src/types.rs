//! Chat-completion wire types and the fit-analysis result.

use serde::{Deserialize, Serialize};

/// The model's verdict on one product, normalized from whatever JSON the
/// completion contained.
///
/// `score` is always in `[0, 10]`; `pros` and `cons` hold at most three
/// entries each. Every failure mode produces [`FitAnalysis::fallback`]
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitAnalysis {
    pub score: u8,
    pub explanation: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl FitAnalysis {
    /// Zero-score placeholder used when a completion fails or cannot be parsed.
    #[must_use]
    pub fn fallback(explanation: &str) -> Self {
        Self {
            score: 0,
            explanation: explanation.to_owned(),
            pros: Vec::new(),
            cons: Vec::new(),
        }
    }

    /// The score normalized to `[0.0, 1.0]` for display and ranking.
    #[must_use]
    pub fn fit_score(&self) -> f64 {
        f64::from(self.score) / 10.0
    }
}

// ---------------------------------------------------------------------------
// Chat-completion request/response (OpenAI-compatible)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}
