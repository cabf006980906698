//! Built-in gesture tour used when no script is given

use lv_core::{BucketRange, EngineConfig, RecordId, ViewEvent, ZoomTransform, ALL_CATEGORIES};

/// A short session touching every kind of gesture
///
/// Views are taken from `config`, so the tour fits any view layout.
pub fn default_script(config: &EngineConfig) -> Vec<ViewEvent> {
    let owner = config.brush_owner.clone();
    let other = config
        .views
        .iter()
        .map(|v| v.name.clone())
        .find(|name| *name != owner)
        .unwrap_or_else(|| owner.clone());

    let mut script = Vec::new();

    if let Some(category) = config.categories.first() {
        script.push(ViewEvent::GlobalFilter { category: category.clone() });
    }

    script.extend([
        // Middle half of the owner's band axis
        ViewEvent::BrushPixels {
            x0: config.band_width * 0.25,
            x1: config.band_width * 0.75,
            source: owner.clone(),
        },
        ViewEvent::Zoom {
            view: other.clone(),
            transform: ZoomTransform::new(2.0, -config.band_width / 4.0, 0.0),
        },
        ViewEvent::Hover { record: RecordId(0) },
        ViewEvent::Unhover,
        ViewEvent::ResetView { view: other.clone() },
        ViewEvent::Brush { range: None, source: owner.clone() },
        ViewEvent::GlobalFilter { category: ALL_CATEGORIES.to_string() },
        ViewEvent::Brush {
            range: Some(BucketRange::new(i32::MIN, i32::MAX)),
            source: owner,
        },
        ViewEvent::ResetView { view: other },
        ViewEvent::ResetAll,
    ]);

    script
}
