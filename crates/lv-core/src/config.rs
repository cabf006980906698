//! Engine configuration, fixed at coordinator construction

use serde::{Serialize, Deserialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::data::{GroupKey, Metric};
use crate::navigation::ScaleExtent;
use crate::state::ViewId;

/// Errors raised while loading or validating an [`EngineConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Category set is empty")]
    NoCategories,

    #[error("Zoom bound must be a finite number >= 1, got {0}")]
    InvalidZoomBound(f64),

    #[error("Band axis width must be positive, got {0}")]
    InvalidBandWidth(f64),

    #[error("Duplicate view name '{0}'")]
    DuplicateView(ViewId),

    #[error("Brush owner '{0}' is not a configured view")]
    MissingBrushOwner(ViewId),

    #[error("Brush owner '{0}' must be a stacked bar view")]
    BrushOwnerNotBanded(ViewId),
}

/// What a view draws, and from which fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartKind {
    /// One point per record
    Scatter { x: Metric, y: Metric },

    /// Record counts per bucket, split by a group key
    StackedBar { group_key: GroupKey },

    /// Quartiles of a metric per category
    BoxPlot { metric: Metric },

    /// Mean of a metric per category and bucket
    Line { metric: Metric },
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Scatter { x, y } => {
                write!(f, "scatter of {} against {}", y.label(), x.label())
            }
            ChartKind::StackedBar { group_key } => {
                let key = match group_key {
                    GroupKey::Cylinders => "cylinders",
                    GroupKey::Manufacturer => "manufacturer",
                    GroupKey::Origin => "origin",
                };
                write!(f, "stacked bar by {}", key)
            }
            ChartKind::BoxPlot { metric } => write!(f, "box plot of {}", metric.label()),
            ChartKind::Line { metric } => write!(f, "mean {} by year", metric.label()),
        }
    }
}

/// One named view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDefinition {
    pub name: ViewId,
    pub chart: ChartKind,
}

impl ViewDefinition {
    pub fn new(name: &str, chart: ChartKind) -> Self {
        Self {
            name: ViewId::from(name),
            chart,
        }
    }
}

/// Configuration of the linked-view engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Category set, in display order
    pub categories: Vec<String>,

    /// Upper zoom bound K; scales are kept within `[1, K]`
    pub max_zoom: f64,

    /// The only view allowed to raise brush events
    pub brush_owner: ViewId,

    /// Width in pixels of the brush owner's band axis
    pub band_width: f64,

    /// Views in registration order
    pub views: Vec<ViewDefinition>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                "American".to_string(),
                "European".to_string(),
                "Japanese".to_string(),
            ],
            max_zoom: 10.0,
            brush_owner: ViewId::from("barchart"),
            band_width: 590.0,
            views: vec![
                ViewDefinition::new("scatter1", ChartKind::Scatter {
                    x: Metric::Mpg,
                    y: Metric::Horsepower,
                }),
                ViewDefinition::new("barchart", ChartKind::StackedBar {
                    group_key: GroupKey::Cylinders,
                }),
                ViewDefinition::new("boxplot", ChartKind::BoxPlot { metric: Metric::Mpg }),
                ViewDefinition::new("linechart", ChartKind::Line { metric: Metric::Mpg }),
            ],
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Zoom scale interval `[1, K]`
    pub fn scale_extent(&self) -> ScaleExtent {
        ScaleExtent::up_to(self.max_zoom)
    }

    /// Find a view definition by name
    pub fn view(&self, name: &str) -> Option<&ViewDefinition> {
        self.views.iter().find(|v| v.name.as_str() == name)
    }

    /// Check the configuration's internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        if !self.max_zoom.is_finite() || self.max_zoom < 1.0 {
            return Err(ConfigError::InvalidZoomBound(self.max_zoom));
        }

        if !self.band_width.is_finite() || self.band_width <= 0.0 {
            return Err(ConfigError::InvalidBandWidth(self.band_width));
        }

        let mut seen = HashSet::new();
        for view in &self.views {
            if !seen.insert(view.name.as_str()) {
                return Err(ConfigError::DuplicateView(view.name.clone()));
            }
        }

        match self.view(self.brush_owner.as_str()) {
            None => Err(ConfigError::MissingBrushOwner(self.brush_owner.clone())),
            Some(view) if !matches!(view.chart, ChartKind::StackedBar { .. }) => {
                Err(ConfigError::BrushOwnerNotBanded(self.brush_owner.clone()))
            }
            Some(_) => Ok(()),
        }
    }
}
