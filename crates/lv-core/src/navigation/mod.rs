//! Per-view pan/zoom state and band-axis brush framing

mod band;
mod transform;

pub use band::BandAxis;
pub use transform::{ScaleExtent, ZoomTransform};
