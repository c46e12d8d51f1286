use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of the node set owning one partition. Constructed by
/// `PartitionTable` implementations; the routing layer only compares and
/// forwards it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartitionGroup {
    id: u64,
}

impl PartitionGroup {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for PartitionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group-{}", self.id)
    }
}
