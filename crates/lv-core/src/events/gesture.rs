//! Gestures reported by the renderer

use serde::{Serialize, Deserialize};

use crate::data::RecordId;
use crate::filter::BucketRange;
use crate::navigation::ZoomTransform;
use crate::state::ViewId;

/// One inbound gesture; the coordinator handles exactly these
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    /// Global category control changed (`"all"` clears it)
    GlobalFilter { category: String },

    /// Brush set or cleared on the brush owner, in bucket space
    Brush {
        range: Option<BucketRange>,
        source: ViewId,
    },

    /// Brush set on the brush owner, in pixel space of its band axis
    BrushPixels { x0: f64, x1: f64, source: ViewId },

    /// Pan/zoom of one view
    Zoom { view: ViewId, transform: ZoomTransform },

    ResetView { view: ViewId },

    ResetAll,

    Hover { record: RecordId },

    Unhover,
}

impl ViewEvent {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ViewEvent::GlobalFilter { .. } => "global_filter",
            ViewEvent::Brush { .. } => "brush",
            ViewEvent::BrushPixels { .. } => "brush_pixels",
            ViewEvent::Zoom { .. } => "zoom",
            ViewEvent::ResetView { .. } => "reset_view",
            ViewEvent::ResetAll => "reset_all",
            ViewEvent::Hover { .. } => "hover",
            ViewEvent::Unhover => "unhover",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gesture_script() {
        let script = r#"[
            { "type": "global_filter", "category": "Japanese" },
            { "type": "brush", "range": { "min": 75, "max": 78 }, "source": "barchart" },
            { "type": "brush", "range": null, "source": "barchart" },
            { "type": "zoom", "view": "scatter1", "transform": { "k": 2.0, "x": -10.0, "y": 0.0 } },
            { "type": "reset_all" }
        ]"#;

        let events: Vec<ViewEvent> = serde_json::from_str(script).unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(
            events[1],
            ViewEvent::Brush {
                range: Some(BucketRange::new(75, 78)),
                source: ViewId::from("barchart"),
            }
        );
        assert_eq!(events[2].kind(), "brush");
        assert_eq!(events[4], ViewEvent::ResetAll);
    }
}
