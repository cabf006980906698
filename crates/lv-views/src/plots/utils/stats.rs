//! Statistical utilities for plots

/// Quantile of an ascending slice by linear interpolation
///
/// Uses the `(n - 1) * p` index method. Returns `None` for an empty slice.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let idx = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    Some(interpolate(sorted, idx))
}

/// Calculate (Q1, median, Q3) of an ascending slice
pub fn calculate_quartiles(sorted: &[f64]) -> Option<(f64, f64, f64)> {
    Some((
        quantile_sorted(sorted, 0.25)?,
        quantile_sorted(sorted, 0.5)?,
        quantile_sorted(sorted, 0.75)?,
    ))
}

fn interpolate(sorted: &[f64], idx: f64) -> f64 {
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;

    if lower == upper || upper >= sorted.len() {
        sorted[lower]
    } else {
        let fraction = idx - lower as f64;
        sorted[lower] * (1.0 - fraction) + sorted[upper] * fraction
    }
}

/// Arithmetic mean; `None` when there are no values
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Sort values ascending; values are finite by store invariant
pub fn sorted_ascending(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(f64::total_cmp);
    values
}
