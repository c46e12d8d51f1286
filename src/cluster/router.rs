use std::sync::Arc;

use tracing::debug;

use crate::cluster::errors::{MetaError, RouteError};
use crate::cluster::meta::MetaResolver;
use crate::cluster::partition::{PartitionGroup, PartitionTable};
use crate::plan::classify::RouteOp;
use crate::plan::types::Plan;

/// Resolves the one partition group owning a single-target plan. Stateless
/// apart from shared handles to the cluster collaborators.
pub struct Router {
    table: Arc<dyn PartitionTable>,
    meta: Arc<dyn MetaResolver>,
}

impl Router {
    pub fn new(table: Arc<dyn PartitionTable>, meta: Arc<dyn MetaResolver>) -> Self {
        Self { table, meta }
    }

    /// Owning group for a plan confined to one partition. Splittable and
    /// unrecognized kinds are rejected with `UnsupportedPlanKind`.
    pub fn route_single(&self, plan: &Plan) -> Result<PartitionGroup, RouteError> {
        match plan {
            Plan::Insert {
                device, timestamp, ..
            } => Ok(self.table.by_path_time(device, *timestamp)?),
            // Series creation is anchored at time zero.
            Plan::CreateTimeSeries { path, .. } => Ok(self.table.by_path_time(path, 0)?),
            Plan::ShowChildPaths { path } => self.route_child_paths(path),
            _ => Err(RouteError::unsupported(plan, RouteOp::Single)),
        }
    }

    fn route_child_paths(&self, path: &str) -> Result<PartitionGroup, RouteError> {
        match self.meta.storage_group_of(path) {
            Ok(storage_group) => Ok(self.table.route(&storage_group, 0)),
            Err(MetaError::StorageGroupNotSet(_)) => {
                // The path sits above every configured storage group, e.g.
                // the tree root. Any group's metadata can answer, so take
                // the first local one instead of failing.
                debug!(
                    target: "cluster::router",
                    path,
                    "No storage group at or above path, answering from the first local group"
                );
                let group = self
                    .table
                    .local_groups()
                    .into_iter()
                    .next()
                    .expect("local_groups is empty on a live node");
                Ok(group)
            }
            Err(e) => Err(e.into()),
        }
    }
}
