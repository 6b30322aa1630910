//! Shared domain types, configuration, and retry policy for dealscout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod retry;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use retry::retry_with_backoff;

/// Sentinel substituted for any missing display field on a product record.
pub const NOT_AVAILABLE: &str = "N/A";

/// User preferences accompanying a recommendation request.
///
/// Immutable once a request has been validated. `budget` is an inclusive
/// `[min, max]` price range; `features` keeps the order the client sent
/// (irrelevant to scoring, preserved for prompt construction).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPreferences {
    pub budget: [f64; 2],
    pub features: Vec<String>,
}

impl SearchPreferences {
    #[must_use]
    pub fn budget_min(&self) -> f64 {
        self.budget[0]
    }

    #[must_use]
    pub fn budget_max(&self) -> f64 {
        self.budget[1]
    }
}

/// A normalized shopping result, produced by the search client from a raw
/// provider record. Never mutated after creation; analysis fields are
/// attached separately when a page is scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    /// Display price as the provider formatted it (e.g. `"$1,299.00"`).
    pub price: String,
    /// Numeric price parsed by the provider; always within the requested
    /// budget after filtering.
    pub extracted_price: f64,
    pub rating: Option<f64>,
    pub reviews: Option<i64>,
    pub image: String,
    pub link: String,
    pub description: String,
    pub source: String,
    /// The provider's own relevance rank, used for the pre-filter cutoff.
    pub position: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
