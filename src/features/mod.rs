//! Feature extraction
//!
//! Reduces a nested delivery-by-delivery match record to per-innings
//! summary statistics plus match metadata.

pub mod innings_stats;
pub mod match_repr;

pub use innings_stats::InningsTotals;
pub use match_repr::{FeatureRecord, FeatureShape};
