//! Record model and the read-only store shared by all views

mod record;
mod store;

pub use record::{GroupKey, GroupValue, Metric, Record, RecordId};
pub use store::RecordStore;

use std::sync::Arc;

/// Trait for anything that can produce a validated record store
///
/// Loading is the one asynchronous step of the system and happens before
/// a coordinator is constructed.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    /// Load and validate the full dataset
    async fn load(&self) -> anyhow::Result<Arc<RecordStore>>;

    /// Get the source name/path
    fn source_name(&self) -> &str;
}
