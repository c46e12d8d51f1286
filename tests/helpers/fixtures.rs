use std::collections::HashMap;

use indexmap::IndexMap;

use crate::cluster::errors::MetaError;
use crate::cluster::meta::{MetaResolver, strip_wildcard_tail};
use crate::cluster::partition::{PartitionGroup, PartitionTable};

/// In-memory partition table over a fixed set of storage groups. Ownership
/// is an exact `(storage group, timestamp)` lookup with a default group for
/// everything unregistered, so tests pin down only the routes they assert.
pub struct FixturePartitionTable {
    storage_groups: Vec<String>,
    routes: HashMap<(String, i64), PartitionGroup>,
    default_group: PartitionGroup,
    locals: Vec<PartitionGroup>,
}

impl FixturePartitionTable {
    pub fn new(
        storage_groups: Vec<String>,
        routes: HashMap<(String, i64), PartitionGroup>,
        default_group: PartitionGroup,
        locals: Vec<PartitionGroup>,
    ) -> Self {
        Self {
            storage_groups,
            routes,
            default_group,
            locals,
        }
    }

    fn owning_storage_group(&self, path: &str) -> Result<&str, MetaError> {
        if path.is_empty() || !path.starts_with("root") {
            return Err(MetaError::IllegalPath(path.to_string()));
        }
        self.storage_groups
            .iter()
            .filter(|sg| path == sg.as_str() || path.starts_with(&format!("{sg}.")))
            .max_by_key(|sg| sg.len())
            .map(|sg| sg.as_str())
            .ok_or_else(|| MetaError::StorageGroupNotSet(path.to_string()))
    }
}

impl PartitionTable for FixturePartitionTable {
    fn by_path_time(&self, path: &str, timestamp: i64) -> Result<PartitionGroup, MetaError> {
        let storage_group = self.owning_storage_group(path)?;
        Ok(self.route(storage_group, timestamp))
    }

    fn route(&self, storage_group: &str, timestamp: i64) -> PartitionGroup {
        self.routes
            .get(&(storage_group.to_string(), timestamp))
            .cloned()
            .unwrap_or_else(|| self.default_group.clone())
    }

    fn local_groups(&self) -> Vec<PartitionGroup> {
        self.locals.clone()
    }
}

/// In-memory metadata tree over a fixed set of storage groups.
///
/// Wildcard resolution follows the real tree's contract: for a query
/// `prefix.*`, a storage group at or above `prefix` owns the query path
/// unchanged, while a storage group below `prefix` contributes its own
/// subtree as `<group>.*`. An explicit override replaces the whole mapping
/// for tests that need resolver output the tree would never produce.
pub struct FixtureMetaResolver {
    storage_groups: Vec<String>,
    wildcard_override: Option<IndexMap<String, String>>,
}

impl FixtureMetaResolver {
    pub fn new(
        storage_groups: Vec<String>,
        wildcard_override: Option<IndexMap<String, String>>,
    ) -> Self {
        Self {
            storage_groups,
            wildcard_override,
        }
    }
}

impl MetaResolver for FixtureMetaResolver {
    fn storage_group_of(&self, path: &str) -> Result<String, MetaError> {
        if path.is_empty() || !path.starts_with("root") {
            return Err(MetaError::IllegalPath(path.to_string()));
        }
        self.storage_groups
            .iter()
            .filter(|sg| path == sg.as_str() || path.starts_with(&format!("{sg}.")))
            .max_by_key(|sg| sg.len())
            .cloned()
            .ok_or_else(|| MetaError::StorageGroupNotSet(path.to_string()))
    }

    fn resolve_wildcard(&self, path: &str) -> Result<IndexMap<String, String>, MetaError> {
        if let Some(mapping) = &self.wildcard_override {
            return Ok(mapping.clone());
        }
        let Some(prefix) = strip_wildcard_tail(path) else {
            return Err(MetaError::IllegalPath(path.to_string()));
        };
        if prefix.is_empty() || !prefix.starts_with("root") {
            return Err(MetaError::IllegalPath(path.to_string()));
        }

        let mut resolved = IndexMap::new();
        for sg in &self.storage_groups {
            let above_or_equal =
                prefix == sg.as_str() || prefix.starts_with(&format!("{sg}."));
            let below = sg.starts_with(&format!("{prefix}."));
            if above_or_equal {
                resolved.insert(sg.clone(), path.to_string());
            } else if below {
                resolved.insert(sg.clone(), format!("{sg}.*"));
            }
        }
        Ok(resolved)
    }
}
