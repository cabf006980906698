//! Core functionality for the linked-view engine
//!
//! This crate provides the record model, the filter pipeline, per-view
//! transforms, configuration and the event plumbing shared by the
//! coordinator and the renderer side.

pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod filter;
pub mod navigation;
pub mod state;

// Re-export commonly used types
pub use config::{ChartKind, ConfigError, EngineConfig, ViewDefinition};
pub use data::{GroupKey, GroupValue, Metric, Record, RecordId, RecordSource, RecordStore};
pub use error::CoordinatorError;
pub use events::{EventBus, ViewEvent};
pub use filter::{
    compute_selection, BucketRange, CategoryFilter, EffectiveFilter, Selection, ALL_CATEGORIES,
};
pub use navigation::{BandAxis, ScaleExtent, ZoomTransform};
pub use state::ViewId;
