//! Column mapping and validation rules for loading a dataset

use serde::{Serialize, Deserialize};

use super::null_handling::NullConfig;

/// Header names of the columns each record field is read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub name: String,
    pub manufacturer: String,
    pub mpg: String,
    pub cylinders: String,
    pub displacement: String,
    pub horsepower: String,
    pub weight: String,
    pub acceleration: String,
    pub model_year: String,
    pub origin: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            name: "Car".to_string(),
            manufacturer: "Manufacturer".to_string(),
            mpg: "MPG".to_string(),
            cylinders: "Cylinders".to_string(),
            displacement: "Displacement".to_string(),
            horsepower: "Horsepower".to_string(),
            weight: "Weight".to_string(),
            acceleration: "Acceleration".to_string(),
            model_year: "Model Year".to_string(),
            origin: "Origin".to_string(),
        }
    }
}

/// Configuration for turning a CSV byte stream into records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Column mapping
    pub columns: ColumnNames,

    /// Missing-value handling
    pub null_config: NullConfig,

    /// Accepted category labels; empty accepts any non-empty label
    pub categories: Vec<String>,

    /// Field delimiter
    pub delimiter: u8,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            null_config: NullConfig::default(),
            categories: Vec::new(),
            delimiter: b',',
        }
    }
}

impl LoadConfig {
    /// Restrict accepted categories to the given set
    pub fn with_categories(mut self, categories: &[String]) -> Self {
        self.categories = categories.to_vec();
        self
    }

    /// Whether a category label is accepted
    pub fn accepts_category(&self, category: &str) -> bool {
        self.categories.is_empty() || self.categories.iter().any(|c| c == category)
    }
}
