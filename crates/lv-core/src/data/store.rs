//! The immutable record store shared by every view

use ahash::AHashMap;
use std::collections::BTreeSet;

use super::{GroupKey, GroupValue, Record, RecordId};

/// Validated dataset, immutable after construction
///
/// Share it behind an `Arc`; nothing mutates it once built.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    /// Distinct buckets of the full dataset, ascending
    buckets: Vec<i32>,
}

impl RecordStore {
    /// Build a store, assigning each record its row position as id
    pub fn from_records(mut records: Vec<Record>) -> Self {
        for (idx, record) in records.iter_mut().enumerate() {
            record.id = RecordId(idx);
        }

        let buckets = records
            .iter()
            .map(|r| r.model_year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self { records, buckets }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id.index())
    }

    /// All records in id order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct buckets of the whole dataset in ascending order
    ///
    /// This is the stable x-domain for bucketed charts: it does not change
    /// when filters change.
    pub fn buckets(&self) -> &[i32] {
        &self.buckets
    }

    /// Distinct values of a stacking key across the whole dataset, ascending
    pub fn group_values(&self, key: GroupKey) -> Vec<GroupValue> {
        self.records
            .iter()
            .map(|r| r.group_value(key))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Record count per category label
    pub fn category_counts(&self) -> AHashMap<&str, usize> {
        let mut counts = AHashMap::new();
        for record in &self.records {
            *counts.entry(record.category()).or_insert(0) += 1;
        }
        counts
    }
}
