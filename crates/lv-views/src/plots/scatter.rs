//! Scatter plot data: one point per selected record

use serde::Serialize;

use lv_core::{Metric, RecordId, RecordStore, Selection};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub id: RecordId,
    pub x: f64,
    pub y: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoints {
    pub x_metric: Metric,
    pub y_metric: Metric,
    pub points: Vec<ScatterPoint>,
}

pub fn scatter_points(
    store: &RecordStore,
    selection: &Selection,
    x: Metric,
    y: Metric,
) -> ScatterPoints {
    let points = selection
        .records(store)
        .map(|record| ScatterPoint {
            id: record.id,
            x: record.metric(x),
            y: record.metric(y),
            category: record.origin.clone(),
        })
        .collect();

    ScatterPoints {
        x_metric: x,
        y_metric: y,
        points,
    }
}
