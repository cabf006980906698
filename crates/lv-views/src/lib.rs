//! View system for the linked-view engine
//!
//! Owns the aggregation engine, the per-view state and the coordinator that
//! keeps every view consistent with the effective filter.

pub mod plots;
mod space_view;
mod sync;
mod viewport;

pub use plots::{AggregatedSummary, AggregationContext};
pub use space_view::{RedrawRequested, ViewSnapshot, ViewState};
pub use sync::LatestSnapshots;
pub use viewport::ViewCoordinator;
