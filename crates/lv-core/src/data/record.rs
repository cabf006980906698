//! Typed observations held by the record store

use serde::{Serialize, Deserialize};
use std::fmt;

/// Dense identifier of a record: its row position in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub usize);

impl RecordId {
    /// Row position of this record
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One validated observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Position in the store (assigned by the store)
    pub id: RecordId,

    /// Identifier of the observation (car name)
    pub name: String,

    /// Group label (manufacturer)
    pub manufacturer: String,

    pub mpg: f64,
    pub cylinders: f64,
    pub displacement: f64,
    pub horsepower: f64,
    pub weight: f64,
    pub acceleration: f64,

    /// Temporal bucket (model year)
    pub model_year: i32,

    /// Category (origin)
    pub origin: String,
}

impl Record {
    /// Read one numeric measurement
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Mpg => self.mpg,
            Metric::Cylinders => self.cylinders,
            Metric::Displacement => self.displacement,
            Metric::Horsepower => self.horsepower,
            Metric::Weight => self.weight,
            Metric::Acceleration => self.acceleration,
        }
    }

    /// The temporal bucket this record falls into
    pub fn bucket(&self) -> i32 {
        self.model_year
    }

    /// The category label of this record
    pub fn category(&self) -> &str {
        &self.origin
    }

    /// Value of the given stacking key
    pub fn group_value(&self, key: GroupKey) -> GroupValue {
        match key {
            GroupKey::Cylinders => GroupValue::Int(self.cylinders.round() as i64),
            GroupKey::Manufacturer => GroupValue::Text(self.manufacturer.clone()),
            GroupKey::Origin => GroupValue::Text(self.origin.clone()),
        }
    }
}

/// Numeric measurement selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Mpg,
    Cylinders,
    Displacement,
    Horsepower,
    Weight,
    Acceleration,
}

impl Metric {
    /// Human readable axis label
    pub fn label(self) -> &'static str {
        match self {
            Metric::Mpg => "MPG",
            Metric::Cylinders => "Cylinders",
            Metric::Displacement => "Displacement",
            Metric::Horsepower => "Horsepower",
            Metric::Weight => "Weight",
            Metric::Acceleration => "Acceleration",
        }
    }
}

/// Key used to split a stacked bar into segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    Cylinders,
    Manufacturer,
    Origin,
}

/// A value of a [`GroupKey`]
///
/// Integers order before text, so a mixed domain still has a stable order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupValue::Int(v) => write!(f, "{}", v),
            GroupValue::Text(v) => f.write_str(v),
        }
    }
}
