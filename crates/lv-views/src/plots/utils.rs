//! Utilities for plot summaries

pub mod stats;

// Re-export commonly used items
pub use stats::{calculate_quartiles, mean, quantile_sorted, sorted_ascending};
