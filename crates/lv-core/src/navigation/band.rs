//! Translate a pixel-space brush on a band axis into a bucket range

use super::ZoomTransform;
use crate::filter::BucketRange;

/// Evenly spaced band axis over an ordered bucket domain
#[derive(Debug, Clone, Copy)]
pub struct BandAxis<'a> {
    buckets: &'a [i32],
    width: f64,
}

impl<'a> BandAxis<'a> {
    pub fn new(buckets: &'a [i32], width: f64) -> Self {
        Self { buckets, width }
    }

    /// Pixel position of band `index` under `transform`
    pub fn position(&self, index: usize, transform: &ZoomTransform) -> f64 {
        let step = if self.buckets.is_empty() {
            0.0
        } else {
            self.width / self.buckets.len() as f64
        };
        transform.apply_x(index as f64 * step)
    }

    /// Buckets whose band position lies within `[x0, x1]`
    ///
    /// Endpoints may come in either order. Band positions increase with the
    /// bucket index, so the selected buckets are contiguous and the result
    /// is their inclusive range; no band inside the span gives an empty range.
    pub fn resolve(&self, x0: f64, x1: f64, transform: &ZoomTransform) -> BucketRange {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };

        let mut selected = self
            .buckets
            .iter()
            .enumerate()
            .filter(|(idx, _)| {
                let pos = self.position(*idx, transform);
                pos >= lo && pos <= hi
            })
            .map(|(_, bucket)| *bucket);

        match selected.next() {
            Some(first) => {
                let last = selected.last().unwrap_or(first);
                BucketRange::new(first, last)
            }
            None => BucketRange::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEARS: [i32; 4] = [70, 71, 72, 73];

    #[test]
    fn test_identity_resolution() {
        // Bands at 0, 100, 200, 300
        let axis = BandAxis::new(&YEARS, 400.0);
        let identity = ZoomTransform::identity();

        assert_eq!(axis.resolve(90.0, 210.0, &identity), BucketRange::new(71, 72));
        assert_eq!(axis.resolve(210.0, 90.0, &identity), BucketRange::new(71, 72));
        assert_eq!(axis.resolve(0.0, 0.0, &identity), BucketRange::new(70, 70));
        assert!(axis.resolve(10.0, 90.0, &identity).is_empty());
    }

    #[test]
    fn test_resolution_follows_transform() {
        // Scale 2, shifted left by 200: bands at -200, 0, 200, 400
        let axis = BandAxis::new(&YEARS, 400.0);
        let zoomed = ZoomTransform::new(2.0, -200.0, 0.0);

        assert_eq!(axis.resolve(0.0, 250.0, &zoomed), BucketRange::new(71, 72));
        assert_eq!(axis.position(3, &zoomed), 400.0);
    }

    #[test]
    fn test_empty_axis() {
        let axis = BandAxis::new(&[], 400.0);
        assert!(axis.resolve(0.0, 400.0, &ZoomTransform::identity()).is_empty());
    }
}
