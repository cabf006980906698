//! Aggregation engine: per-chart summaries of a selection
//!
//! Every summary is a pure function of the store and a selection; nothing
//! here holds state between calls apart from the fixed domains.

pub mod bar;
pub mod box_plot;
pub mod line;
pub mod scatter;

// Utilities
pub mod utils;

// Re-exports
pub use bar::{stack_counts, StackColumn, StackLayout, StackSegment};
pub use box_plot::{box_summary, BoxStats, BoxSummary, CategoryBox};
pub use line::{grouped_means, CategorySeries, LinePoint, LineSeries};
pub use scatter::{scatter_points, ScatterPoint, ScatterPoints};

use ahash::AHashMap;
use serde::Serialize;
use std::sync::Arc;

use lv_core::{ChartKind, GroupKey, GroupValue, RecordStore, Selection};

/// Derived data for one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AggregatedSummary {
    Scatter(ScatterPoints),
    Stack(StackLayout),
    Box(BoxSummary),
    Line(LineSeries),
}

/// Fixed domains shared by every aggregation over one store
///
/// Bucket and group orders come from the full dataset so chart axes do not
/// reshuffle as filters change.
pub struct AggregationContext {
    store: Arc<RecordStore>,
    categories: Vec<String>,
    groups: AHashMap<GroupKey, Vec<GroupValue>>,
}

impl AggregationContext {
    /// Precompute the group domains the given charts need
    pub fn new<'a>(
        store: Arc<RecordStore>,
        categories: Vec<String>,
        charts: impl IntoIterator<Item = &'a ChartKind>,
    ) -> Self {
        let mut groups = AHashMap::new();
        for chart in charts {
            if let ChartKind::StackedBar { group_key } = chart {
                groups
                    .entry(*group_key)
                    .or_insert_with(|| store.group_values(*group_key));
            }
        }

        Self { store, categories, groups }
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Ascending bucket domain of the full dataset
    pub fn buckets(&self) -> &[i32] {
        self.store.buckets()
    }

    /// Compute the summary a chart needs for a selection
    pub fn summarize(&self, chart: &ChartKind, selection: &Selection) -> AggregatedSummary {
        let store = self.store.as_ref();

        match chart {
            ChartKind::Scatter { x, y } => {
                AggregatedSummary::Scatter(scatter_points(store, selection, *x, *y))
            }
            ChartKind::StackedBar { group_key } => {
                let computed;
                let groups = match self.groups.get(group_key) {
                    Some(groups) => groups,
                    None => {
                        computed = store.group_values(*group_key);
                        &computed
                    }
                };
                let layout = stack_counts(store, selection, *group_key, store.buckets(), groups);
                AggregatedSummary::Stack(layout)
            }
            ChartKind::BoxPlot { metric } => {
                AggregatedSummary::Box(box_summary(store, selection, *metric, &self.categories))
            }
            ChartKind::Line { metric } => {
                AggregatedSummary::Line(grouped_means(store, selection, *metric, &self.categories))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use lv_core::{Record, RecordId, RecordStore};

    pub fn record(origin: &str, year: i32, cylinders: f64, mpg: f64) -> Record {
        Record {
            id: RecordId(0),
            name: format!("{} {} {}", origin, year, mpg),
            manufacturer: "maker".to_string(),
            mpg,
            cylinders,
            displacement: 0.0,
            horsepower: 100.0,
            weight: 3000.0,
            acceleration: 15.0,
            model_year: year,
            origin: origin.to_string(),
        }
    }

    pub fn store_of(records: Vec<Record>) -> RecordStore {
        RecordStore::from_records(records)
    }

    pub fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }
}
