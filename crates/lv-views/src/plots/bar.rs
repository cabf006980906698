//! Stacked bar layout: record counts per bucket split by a group key

use serde::Serialize;

use lv_core::{GroupKey, GroupValue, RecordStore, Selection};

/// One group's segment within a bucket's stack
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackSegment {
    pub group: GroupValue,
    pub count: usize,
    /// Cumulative count below this segment
    pub baseline: usize,
    /// `baseline + count`
    pub top: usize,
}

/// The full stack for one bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackColumn {
    pub bucket: i32,
    /// One segment per group, in the layout's group order
    pub segments: Vec<StackSegment>,
}

impl StackColumn {
    /// Height of the whole stack
    pub fn total(&self) -> usize {
        self.segments.last().map_or(0, |s| s.top)
    }
}

/// Stack layout over the full bucket domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackLayout {
    pub group_key: GroupKey,
    pub groups: Vec<GroupValue>,
    /// One column per bucket of the full dataset, ascending
    pub columns: Vec<StackColumn>,
}

impl StackLayout {
    /// Tallest stack, for sizing the count axis
    pub fn max_total(&self) -> usize {
        self.columns.iter().map(StackColumn::total).max().unwrap_or(0)
    }

    pub fn column(&self, bucket: i32) -> Option<&StackColumn> {
        self.columns
            .binary_search_by_key(&bucket, |c| c.bucket)
            .ok()
            .map(|idx| &self.columns[idx])
    }
}

/// Count selected records per bucket and group, then stack them
///
/// `buckets` and `groups` are the ascending full-dataset domains; every
/// bucket gets a column and every group a segment, even at zero count.
pub fn stack_counts(
    store: &RecordStore,
    selection: &Selection,
    group_key: GroupKey,
    buckets: &[i32],
    groups: &[GroupValue],
) -> StackLayout {
    let mut counts = vec![vec![0usize; groups.len()]; buckets.len()];

    for record in selection.records(store) {
        let bucket_idx = buckets.binary_search(&record.bucket());
        let group_idx = groups.binary_search(&record.group_value(group_key));

        match (bucket_idx, group_idx) {
            (Ok(b), Ok(g)) => counts[b][g] += 1,
            _ => tracing::trace!(record = %record.id, "Record outside the stack domain"),
        }
    }

    let columns = buckets
        .iter()
        .zip(counts)
        .map(|(&bucket, row)| {
            let mut baseline = 0;
            let segments = groups
                .iter()
                .zip(row)
                .map(|(group, count)| {
                    let segment = StackSegment {
                        group: group.clone(),
                        count,
                        baseline,
                        top: baseline + count,
                    };
                    baseline += count;
                    segment
                })
                .collect();

            StackColumn { bucket, segments }
        })
        .collect();

    StackLayout {
        group_key,
        groups: groups.to_vec(),
        columns,
    }
}
