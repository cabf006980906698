//! Line chart summary: mean of a metric per category and bucket

use serde::Serialize;
use std::collections::BTreeMap;

use lv_core::{Metric, RecordStore, Selection};

/// Mean value of one bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinePoint {
    pub bucket: i32,
    pub mean: f64,
    pub count: usize,
}

/// One category's series; buckets without records are absent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    pub category: String,
    pub points: Vec<LinePoint>,
}

impl CategorySeries {
    /// Split the series where a bucket of `domain` is missing
    ///
    /// Each run is drawn as one connected path; a renderer must not join
    /// consecutive runs.
    pub fn segments(&self, domain: &[i32]) -> Vec<&[LinePoint]> {
        let mut runs = Vec::new();
        let mut start = 0;

        for idx in 1..self.points.len() {
            let prev = domain.binary_search(&self.points[idx - 1].bucket);
            let next = domain.binary_search(&self.points[idx].bucket);
            let adjacent = matches!((prev, next), (Ok(a), Ok(b)) if b == a + 1);

            if !adjacent {
                runs.push(&self.points[start..idx]);
                start = idx;
            }
        }

        if start < self.points.len() {
            runs.push(&self.points[start..]);
        }
        runs
    }
}

/// Series for every configured category, in configured order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub metric: Metric,
    pub series: Vec<CategorySeries>,
}

impl LineSeries {
    pub fn get(&self, category: &str) -> Option<&CategorySeries> {
        self.series.iter().find(|s| s.category == category)
    }
}

/// Mean of `metric` for each category × bucket pair with at least one record
pub fn grouped_means(
    store: &RecordStore,
    selection: &Selection,
    metric: Metric,
    categories: &[String],
) -> LineSeries {
    // (sum, count) per bucket, per category
    let mut sums: Vec<BTreeMap<i32, (f64, usize)>> = vec![BTreeMap::new(); categories.len()];

    for record in selection.records(store) {
        if let Some(idx) = categories.iter().position(|c| c == record.category()) {
            let entry = sums[idx].entry(record.bucket()).or_insert((0.0, 0));
            entry.0 += record.metric(metric);
            entry.1 += 1;
        }
    }

    let series = categories
        .iter()
        .zip(sums)
        .map(|(category, buckets)| CategorySeries {
            category: category.clone(),
            points: buckets
                .into_iter()
                .map(|(bucket, (sum, count))| LinePoint {
                    bucket,
                    mean: sum / count as f64,
                    count,
                })
                .collect(),
        })
        .collect();

    LineSeries { metric, series }
}
