use crate::cluster::errors::MetaError;
use crate::cluster::partition::group::PartitionGroup;

/// Cluster-wide ownership lookup. Implementations live outside this layer
/// and must present an internally consistent view for the duration of one
/// routing call.
pub trait PartitionTable: Send + Sync {
    /// Owning group for a concrete path at a point in time. Resolves the
    /// path's storage group internally and fails when that resolution fails.
    fn by_path_time(&self, path: &str, timestamp: i64) -> Result<PartitionGroup, MetaError>;

    /// Owning group for an already known storage group at a point in time.
    fn route(&self, storage_group: &str, timestamp: i64) -> PartitionGroup;

    /// Groups this node is a member of, in stable order. Non-empty on any
    /// live node.
    fn local_groups(&self) -> Vec<PartitionGroup>;
}
