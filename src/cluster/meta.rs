use indexmap::IndexMap;

use crate::cluster::errors::MetaError;

/// Tail appended to a query path to expand it one level into the storage
/// groups below it. Shared between the splitter and resolver implementations
/// so the convention cannot drift apart.
pub const WILDCARD_TAIL: &str = ".*";

/// Metadata-tree lookup. Implementations live outside this layer.
pub trait MetaResolver: Send + Sync {
    /// Name of the storage group owning `path`. Fails with
    /// `StorageGroupNotSet` when the path sits above every configured
    /// storage group, `IllegalPath` when it cannot be parsed at all.
    fn storage_group_of(&self, path: &str) -> Result<String, MetaError>;

    /// Expand a wildcard path into storage group name to matched full path,
    /// in stable order. Empty when nothing under the path matches.
    fn resolve_wildcard(&self, path: &str) -> Result<IndexMap<String, String>, MetaError>;
}

/// `path` widened one level, e.g. `root.vehicle` into `root.vehicle.*`.
pub fn append_wildcard_tail(path: &str) -> String {
    format!("{path}{WILDCARD_TAIL}")
}

/// Undo `append_wildcard_tail`. `None` when the path does not end with the
/// tail; callers decide whether that is worth flagging.
pub fn strip_wildcard_tail(path: &str) -> Option<&str> {
    path.strip_suffix(WILDCARD_TAIL)
}
