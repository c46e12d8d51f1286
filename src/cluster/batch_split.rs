use indexmap::IndexMap;

use crate::cluster::partition::{PartitionGroup, PartitionTable, bucket_start};
use crate::plan::batch::{ColumnData, copy_ranges};
use crate::plan::types::Plan;

/// Accumulate contiguous `(start, end)` index ranges of `timestamps` that
/// share a partition bucket, keyed by the group owning each range. A range
/// is routed at the bucket of its own first timestamp, so a jump that skips
/// whole buckets still lands where its data belongs. A group reappearing for
/// a later bucket simply collects another range; ownership does not have to
/// be monotonic over time.
pub(crate) fn bucket_ranges(
    table: &dyn PartitionTable,
    storage_group: &str,
    interval: i64,
    timestamps: &[i64],
) -> IndexMap<PartitionGroup, Vec<(usize, usize)>> {
    let mut ranges: IndexMap<PartitionGroup, Vec<(usize, usize)>> = IndexMap::new();
    if timestamps.is_empty() {
        return ranges;
    }

    // (range_start, i) is the open range being scanned, bucket its bucket.
    let mut range_start = 0usize;
    let mut bucket = bucket_start(timestamps[0], interval);
    for (i, &t) in timestamps.iter().enumerate().skip(1) {
        let next_bucket = bucket_start(t, interval);
        if next_bucket != bucket {
            let group = table.route(storage_group, bucket);
            ranges.entry(group).or_default().push((range_start, i));
            range_start = i;
            bucket = next_bucket;
        }
    }
    let group = table.route(storage_group, bucket);
    ranges
        .entry(group)
        .or_default()
        .push((range_start, timestamps.len()));

    ranges
}

/// Rebuild one batch-insert sub-plan per group from the accumulated ranges.
/// Each group's rows are copied range by range in index order, so relative
/// order survives and every source row lands in exactly one sub-plan.
pub(crate) fn build_sub_batches(
    device: &str,
    measurements: &[String],
    timestamps: &[i64],
    columns: &[ColumnData],
    ranges: IndexMap<PartitionGroup, Vec<(usize, usize)>>,
) -> Vec<(Plan, PartitionGroup)> {
    let mut routed = Vec::with_capacity(ranges.len());
    for (group, group_ranges) in ranges {
        let sub = Plan::BatchInsert {
            device: device.to_string(),
            measurements: measurements.to_vec(),
            timestamps: copy_ranges(timestamps, &group_ranges),
            columns: columns
                .iter()
                .map(|column| column.take_ranges(&group_ranges))
                .collect(),
        };
        routed.push((sub, group));
    }
    routed
}
