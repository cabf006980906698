//! Filter pipeline: global category filter AND brush range
//!
//! Every view's selection is derived from the store and an
//! [`EffectiveFilter`] by [`compute_selection`]; selections are never edited
//! by hand.

use serde::{Serialize, Deserialize};
use std::fmt;
use std::sync::Arc;

use crate::data::{Record, RecordId, RecordStore};

/// Value of the global category control meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Global categorical filter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Check whether a category label passes this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Only(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Only(name) => f.write_str(name),
        }
    }
}

/// Inclusive range of buckets selected by a brush
///
/// A range with `min > max` contains no bucket; a pixel brush that covers
/// no band resolves to such a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRange {
    pub min: i32,
    pub max: i32,
}

impl BucketRange {
    /// Create a range from two endpoints in either order
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// A range that matches nothing
    pub fn empty() -> Self {
        Self { min: 1, max: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn contains(&self, bucket: i32) -> bool {
        self.min <= bucket && bucket <= self.max
    }
}

impl fmt::Display for BucketRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("[]")
        } else {
            write!(f, "[{}, {}]", self.min, self.max)
        }
    }
}

/// Conjunction of the global category filter and the active brush
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EffectiveFilter {
    pub category: CategoryFilter,
    pub brush: Option<BucketRange>,
}

impl EffectiveFilter {
    /// Check both predicates against one record
    pub fn matches(&self, record: &Record) -> bool {
        self.category.matches(record.category())
            && self.brush.map_or(true, |range| range.contains(record.bucket()))
    }

    /// The same filter with the brush dropped
    pub fn without_brush(&self) -> Self {
        Self {
            category: self.category.clone(),
            brush: None,
        }
    }

    /// Whether this filter retains every record
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_all() && self.brush.is_none()
    }
}

/// Ordered, shared set of selected record ids
///
/// Cloning is cheap; a selection is replaced wholesale, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection(Arc<[RecordId]>);

impl Selection {
    /// Selection of every record in the store
    pub fn full(store: &RecordStore) -> Self {
        Self(store.iter().map(|r| r.id).collect())
    }

    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// Build from ids already in ascending order
    pub fn from_sorted(ids: Vec<RecordId>) -> Self {
        debug_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        Self(ids.into())
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    /// Resolve the selected ids against the store
    pub fn records<'a>(&'a self, store: &'a RecordStore) -> impl Iterator<Item = &'a Record> + 'a {
        self.0.iter().filter_map(move |id| store.get(*id))
    }
}

/// Compute the selected subset of the store for a filter
pub fn compute_selection(store: &RecordStore, filter: &EffectiveFilter) -> Selection {
    let ids: Vec<RecordId> = store
        .iter()
        .filter(|record| filter.matches(record))
        .map(|record| record.id)
        .collect();

    tracing::trace!(
        category = %filter.category,
        brush = ?filter.brush,
        selected = ids.len(),
        total = store.len(),
        "Recomputed selection"
    );

    Selection::from_sorted(ids)
}
