//! Renderer-side cache of the newest snapshot per view

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::trace;

use lv_core::{EventBus, ViewId};

use crate::space_view::{RedrawRequested, ViewSnapshot};

/// Latest snapshot of every view that has been drawn
///
/// Cloning shares the same cache. Snapshots older than the cached one for
/// the same view are discarded, so a renderer never steps backwards.
#[derive(Clone, Default)]
pub struct LatestSnapshots {
    inner: Arc<RwLock<IndexMap<ViewId, Arc<ViewSnapshot>>>>,
}

impl LatestSnapshots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep this cache up to date from the bus
    pub fn attach(&self, bus: &EventBus) {
        let cache = self.clone();
        bus.subscribe_fn::<RedrawRequested, _>(move |event| {
            cache.accept(event.snapshot.clone());
        });
    }

    /// Store `snapshot` unless a same-or-newer generation is already cached
    pub fn accept(&self, snapshot: Arc<ViewSnapshot>) -> bool {
        let mut snapshots = self.inner.write();

        if let Some(current) = snapshots.get(&snapshot.view) {
            if current.generation >= snapshot.generation {
                trace!(
                    view = %snapshot.view,
                    generation = snapshot.generation,
                    current = current.generation,
                    "Discarding stale snapshot"
                );
                return false;
            }
        }

        snapshots.insert(snapshot.view.clone(), snapshot);
        true
    }

    pub fn get(&self, view: &str) -> Option<Arc<ViewSnapshot>> {
        self.inner.read().get(view).cloned()
    }

    /// Views in the order they were first drawn
    pub fn views(&self) -> Vec<ViewId> {
        self.inner.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
