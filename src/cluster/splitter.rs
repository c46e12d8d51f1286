use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::cluster::batch_split::{bucket_ranges, build_sub_batches};
use crate::cluster::errors::RouteError;
use crate::cluster::meta::{MetaResolver, WILDCARD_TAIL, append_wildcard_tail, strip_wildcard_tail};
use crate::cluster::partition::{PartitionGroup, PartitionTable};
use crate::cluster::router::Router;
use crate::plan::batch::ColumnData;
use crate::plan::classify::RouteOp;
use crate::plan::types::{CountTarget, Plan};
use crate::shared::config::CONFIG;

/// Sub-plans paired with the group that owns each, in dispatch order.
/// Borrowed entries are the caller's plan untouched; owned entries were
/// rebuilt for one group.
pub type RoutedPlans<'a> = Vec<(Cow<'a, Plan>, PartitionGroup)>;

/// Splits multi-partition plans into disjoint per-group sub-plans and routes
/// each one. Single-target write kinds pass through the inner `Router`
/// unchanged so callers can feed every write path to one entry point.
pub struct Splitter {
    table: Arc<dyn PartitionTable>,
    meta: Arc<dyn MetaResolver>,
    router: Router,
    interval: i64,
}

impl Splitter {
    /// Build a splitter on the cluster-wide partition interval from
    /// configuration.
    pub fn new(table: Arc<dyn PartitionTable>, meta: Arc<dyn MetaResolver>) -> Self {
        let router = Router::new(Arc::clone(&table), Arc::clone(&meta));
        Self {
            table,
            meta,
            router,
            interval: CONFIG.partition.time_partition_interval,
        }
    }

    /// Override the partition interval. Every node of a cluster must agree
    /// on it.
    pub fn with_interval(mut self, interval: i64) -> Self {
        self.interval = interval;
        self
    }

    /// Split `plan` into per-group sub-plans whose union is exactly the
    /// input. Each sub-plan pairs with the one group owning its slice of
    /// the data.
    pub fn split_and_route<'a>(&self, plan: &'a Plan) -> Result<RoutedPlans<'a>, RouteError> {
        match plan {
            // Inherently single-target; kept splittable so writes of any
            // shape go through the same entry point.
            Plan::Insert { .. } | Plan::CreateTimeSeries { .. } => {
                let group = self.router.route_single(plan)?;
                Ok(vec![(Cow::Borrowed(plan), group)])
            }
            Plan::BatchInsert {
                device,
                measurements,
                timestamps,
                columns,
            } => self.split_batch_insert(device, measurements, timestamps, columns),
            Plan::Count {
                target,
                path,
                level,
            } => self.split_count(plan, *target, path, *level),
            Plan::ShowDevices { path } => self.split_show_devices(path),
            Plan::ShowTimeSeries {
                path,
                contains,
                key,
                value,
            } => self.split_show_timeseries(path, *contains, key, value),
            Plan::Update { .. } => {
                // Recognized but permanently unsupported here, as opposed to
                // a misdirected call.
                error!(target: "cluster::splitter", "Update plans cannot be split yet");
                Err(RouteError::UnsupportedPlanKind(plan.kind_name().to_string()))
            }
            _ => Err(RouteError::unsupported(plan, RouteOp::Split)),
        }
    }

    fn split_batch_insert<'a>(
        &self,
        device: &str,
        measurements: &[String],
        timestamps: &[i64],
        columns: &[ColumnData],
    ) -> Result<RoutedPlans<'a>, RouteError> {
        if timestamps.is_empty() {
            return Ok(Vec::new());
        }
        let storage_group = self.meta.storage_group_of(device)?;
        let ranges = bucket_ranges(
            self.table.as_ref(),
            &storage_group,
            self.interval,
            timestamps,
        );
        debug!(
            target: "cluster::splitter",
            device,
            rows = timestamps.len(),
            groups = ranges.len(),
            "Split batch insert by partition bucket"
        );
        let routed = build_sub_batches(device, measurements, timestamps, columns, ranges);
        Ok(routed
            .into_iter()
            .map(|(sub, group)| (Cow::Owned(sub), group))
            .collect())
    }

    fn split_count<'a>(
        &self,
        plan: &'a Plan,
        target: CountTarget,
        path: &str,
        level: u32,
    ) -> Result<RoutedPlans<'a>, RouteError> {
        // Counts scan one level below the given path whether or not the
        // caller wrote a wildcard.
        let resolved = self.meta.resolve_wildcard(&append_wildcard_tail(path))?;
        if resolved.is_empty() {
            return Err(RouteError::StorageGroupNotFound(path.to_string()));
        }

        if target.supports_wildcard() {
            // Each group counts its own matched subtree.
            let mut routed = Vec::with_capacity(resolved.len());
            for (storage_group, matched) in &resolved {
                let sub = Plan::Count {
                    target,
                    path: matched.clone(),
                    level,
                };
                routed.push((Cow::Owned(sub), self.table.route(storage_group, 0)));
            }
            return Ok(routed);
        }

        if resolved.len() == 1 {
            // One owner: hand it the untouched plan. The loop only ever
            // sees the single entry.
            let routed = resolved
                .keys()
                .map(|storage_group| {
                    (Cow::Borrowed(plan), self.table.route(storage_group, 0))
                })
                .collect();
            return Ok(routed);
        }

        // The target cannot interpret the tail the expansion added, so take
        // it back off each matched path.
        let mut routed = Vec::with_capacity(resolved.len());
        for (storage_group, matched) in &resolved {
            let scoped = match strip_wildcard_tail(matched) {
                Some(stripped) => stripped.to_string(),
                None => {
                    warn!(
                        target: "cluster::splitter",
                        path = matched.as_str(),
                        tail = WILDCARD_TAIL,
                        "Resolved path does not end with the wildcard tail, leaving it as is"
                    );
                    matched.clone()
                }
            };
            let sub = Plan::Count {
                target,
                path: scoped,
                level,
            };
            routed.push((Cow::Owned(sub), self.table.route(storage_group, 0)));
        }
        Ok(routed)
    }

    fn split_show_devices<'a>(&self, path: &str) -> Result<RoutedPlans<'a>, RouteError> {
        // Same one-level expansion as Count, but an empty resolution is a
        // valid "no devices" answer rather than an error.
        let resolved = self.meta.resolve_wildcard(&append_wildcard_tail(path))?;
        let mut routed = Vec::with_capacity(resolved.len());
        for (storage_group, matched) in &resolved {
            let sub = Plan::ShowDevices {
                path: matched.clone(),
            };
            routed.push((Cow::Owned(sub), self.table.route(storage_group, 0)));
        }
        Ok(routed)
    }

    fn split_show_timeseries<'a>(
        &self,
        path: &str,
        contains: bool,
        key: &Option<String>,
        value: &Option<String>,
    ) -> Result<RoutedPlans<'a>, RouteError> {
        let resolved = self.meta.resolve_wildcard(&append_wildcard_tail(path))?;
        if resolved.is_empty() {
            return Err(RouteError::StorageGroupNotFound(path.to_string()));
        }
        let mut routed = Vec::with_capacity(resolved.len());
        for (storage_group, matched) in &resolved {
            // The attribute filter rides along unchanged.
            let sub = Plan::ShowTimeSeries {
                path: matched.clone(),
                contains,
                key: key.clone(),
                value: value.clone(),
            };
            routed.push((Cow::Owned(sub), self.table.route(storage_group, 0)));
        }
        Ok(routed)
    }
}
