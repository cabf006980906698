//! Box plot summary: quartiles of a metric per category

use serde::Serialize;

use lv_core::{Metric, RecordStore, Selection};
use super::utils::stats::{calculate_quartiles, mean, sorted_ascending};

/// Whisker length in interquartile ranges
const WHISKER_IQR: f64 = 1.5;

/// Five-number summary plus outliers for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_min: f64,
    pub whisker_max: f64,
    pub mean: f64,
    /// Values strictly outside the whiskers, ascending
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Summarize a set of values; `None` when there are none
    pub fn from_values(values: Vec<f64>) -> Option<Self> {
        let sorted = sorted_ascending(values);
        let (q1, median, q3) = calculate_quartiles(&sorted)?;
        let min = sorted[0];
        let max = sorted[sorted.len() - 1];

        let iqr = q3 - q1;
        let whisker_min = min.max(q1 - WHISKER_IQR * iqr);
        let whisker_max = max.min(q3 + WHISKER_IQR * iqr);

        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < whisker_min || v > whisker_max)
            .collect();

        Some(Self {
            count: sorted.len(),
            q1,
            median,
            q3,
            whisker_min,
            whisker_max,
            mean: mean(sorted.iter().copied())?,
            outliers,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Box for one category; `stats` is `None` when the category is empty
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBox {
    pub category: String,
    pub stats: Option<BoxStats>,
}

/// Boxes for every configured category, in configured order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub metric: Metric,
    pub boxes: Vec<CategoryBox>,
}

impl BoxSummary {
    /// Boxes that have something to draw
    pub fn drawable(&self) -> impl Iterator<Item = (&str, &BoxStats)> {
        self.boxes
            .iter()
            .filter_map(|b| b.stats.as_ref().map(|s| (b.category.as_str(), s)))
    }

    pub fn get(&self, category: &str) -> Option<&CategoryBox> {
        self.boxes.iter().find(|b| b.category == category)
    }
}

/// Compute the box summary of `metric` per category over a selection
pub fn box_summary(
    store: &RecordStore,
    selection: &Selection,
    metric: Metric,
    categories: &[String],
) -> BoxSummary {
    let mut values: Vec<Vec<f64>> = vec![Vec::new(); categories.len()];

    for record in selection.records(store) {
        if let Some(idx) = categories.iter().position(|c| c == record.category()) {
            values[idx].push(record.metric(metric));
        }
    }

    let boxes = categories
        .iter()
        .zip(values)
        .map(|(category, values)| {
            if values.is_empty() {
                tracing::trace!(%category, "No records for box");
            }
            CategoryBox {
                category: category.clone(),
                stats: BoxStats::from_values(values),
            }
        })
        .collect();

    BoxSummary { metric, boxes }
}
