//! Fit-score analysis for dealscout.
//!
//! Asks an OpenAI-compatible chat-completion provider to score how well a
//! product matches the user's stated preferences, parsing a JSON object out
//! of the model's free-text reply. Analysis is deliberately infallible at
//! the call site: any provider or parse failure degrades that one product to
//! a zero-score [`FitAnalysis`] instead of aborting the batch.

pub mod analyzer;
pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use analyzer::{analyze, analyze_page};
pub use client::{CompletionClient, CompletionSettings};
pub use error::AnalyzerError;
pub use types::FitAnalysis;
