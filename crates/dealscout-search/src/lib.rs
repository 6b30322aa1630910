//! Shopping-search provider client for dealscout.
//!
//! Wraps the SerpApi `google_shopping` engine: sends one query with the
//! search text, a result-count hint, the budget encoded as a price-range
//! filter, and a currency unit; normalizes the heterogeneous result records
//! into uniform [`dealscout_core::ProductRecord`]s; and discards records
//! outside the budget or below the relevance-position cutoff.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::SearchClient;
pub use error::SearchError;
