//! The dealscout recommendation pipeline.
//!
//! One authoritative implementation of the search → paginate → analyze →
//! rank → assemble flow. Pagination happens BEFORE scoring so that LLM cost
//! is only paid for the page actually requested; the accepted consequence is
//! that fit ranking (and the best-match label) is scoped to a single page.

pub mod error;
pub mod paginate;
pub mod pipeline;
pub mod rank;
pub mod types;

pub use error::RecommendError;
pub use paginate::{paginate, total_pages};
pub use pipeline::{no_match_message, recommend, RecommendRequest};
pub use rank::rank;
pub use types::{PageResult, RankedProduct};
