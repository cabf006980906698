//! Zoom/pan transform of a single view

use serde::{Serialize, Deserialize};

/// Allowed zoom scale interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleExtent {
    pub min: f64,
    pub max: f64,
}

impl ScaleExtent {
    /// Extent `[1, max]`
    pub fn up_to(max: f64) -> Self {
        Self { min: 1.0, max }
    }

    pub fn clamp(&self, k: f64) -> f64 {
        k.clamp(self.min, self.max)
    }
}

/// Scale and translation applied to a view's plot area
///
/// A point `p` maps to `p * k + (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ZoomTransform {
    pub const fn identity() -> Self {
        Self { k: 1.0, x: 0.0, y: 0.0 }
    }

    pub fn new(k: f64, x: f64, y: f64) -> Self {
        Self { k, x, y }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    pub fn is_finite(&self) -> bool {
        self.k.is_finite() && self.x.is_finite() && self.y.is_finite()
    }

    /// Same translation with the scale clamped into `extent`
    pub fn clamped(self, extent: ScaleExtent) -> Self {
        Self {
            k: extent.clamp(self.k),
            ..self
        }
    }

    pub fn apply_x(&self, x: f64) -> f64 {
        x * self.k + self.x
    }

    pub fn apply_y(&self, y: f64) -> f64 {
        y * self.k + self.y
    }
}
