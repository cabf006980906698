//! Per-view state and the read-only snapshots handed to renderers

use serde::Serialize;
use std::sync::Arc;

use lv_core::events::Event;
use lv_core::{ChartKind, Selection, ViewId, ZoomTransform};

use crate::plots::AggregatedSummary;

/// State the coordinator keeps for one view
#[derive(Debug, Clone)]
pub struct ViewState {
    pub chart: ChartKind,

    /// Current selection, always derived from the effective filter
    pub selection: Selection,

    /// Current pan/zoom, independent of the selection
    pub transform: ZoomTransform,

    /// Set when the view was reset while a brush was active: its selection
    /// ignores the brush until the next filter or brush change
    pub detached_from_brush: bool,

    /// Summary of `selection`, recomputed whenever the selection changes
    pub summary: Arc<AggregatedSummary>,
}

/// Everything a renderer needs to draw one view
///
/// Snapshots are immutable; a newer generation supersedes older ones.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub view: ViewId,
    pub generation: u64,
    pub selection: Selection,
    pub transform: ZoomTransform,
    pub summary: Arc<AggregatedSummary>,
}

/// A view must be redrawn from the attached snapshot
#[derive(Debug, Clone)]
pub struct RedrawRequested {
    pub snapshot: Arc<ViewSnapshot>,
}

impl Event for RedrawRequested {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
