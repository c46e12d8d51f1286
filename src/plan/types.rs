use serde::{Deserialize, Serialize};

use crate::plan::batch::{ColumnData, Encoding, FieldType};

/// A logical plan as seen by the routing layer. Each variant carries exactly
/// the fields its routing or splitting logic reads; execution happens
/// elsewhere. Plans are immutable inputs, splitting builds fresh copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Plan {
    Insert {
        device: String,
        timestamp: i64,
        measurements: Vec<String>,
        values: Vec<String>,
    },
    BatchInsert {
        device: String,
        measurements: Vec<String>,
        /// Sorted ascending; enforced by the session layer, not here.
        timestamps: Vec<i64>,
        /// One typed column per measurement, each as long as `timestamps`.
        columns: Vec<ColumnData>,
    },
    CreateTimeSeries {
        path: String,
        field_type: FieldType,
        encoding: Encoding,
    },
    ShowChildPaths {
        path: String,
    },
    ShowDevices {
        path: String,
    },
    ShowTimeSeries {
        path: String,
        contains: bool,
        key: Option<String>,
        value: Option<String>,
    },
    Count {
        target: CountTarget,
        path: String,
        level: u32,
    },
    Update {
        path: String,
        start_time: i64,
        end_time: i64,
        value: String,
    },
    /// Any plan this layer never places itself; `scope` says where it runs.
    Other {
        name: String,
        scope: PlanScope,
    },
}

/// What a Count plan counts below its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountTarget {
    Timeseries,
    Devices,
    StorageGroups,
    Nodes,
}

impl CountTarget {
    /// Only time-series counting understands wildcard-scoped paths; the
    /// other targets must be handed plain paths.
    pub fn supports_wildcard(&self) -> bool {
        matches!(self, CountTarget::Timeseries)
    }
}

/// Execution scope of plans the routing layer refuses to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanScope {
    /// Must run on the receiving node directly, e.g. a configuration reload.
    LocalOnly,
    /// Must be broadcast to every partition group, e.g. storage-group DDL.
    Global,
    /// Nothing known about where the plan belongs.
    Unclassified,
}

impl Plan {
    /// Name of the plan kind, for diagnostics and errors.
    pub fn kind_name(&self) -> &str {
        match self {
            Plan::Insert { .. } => "Insert",
            Plan::BatchInsert { .. } => "BatchInsert",
            Plan::CreateTimeSeries { .. } => "CreateTimeSeries",
            Plan::ShowChildPaths { .. } => "ShowChildPaths",
            Plan::ShowDevices { .. } => "ShowDevices",
            Plan::ShowTimeSeries { .. } => "ShowTimeSeries",
            Plan::Count { .. } => "Count",
            Plan::Update { .. } => "Update",
            Plan::Other { name, .. } => name,
        }
    }

    /// True for plans that must execute on the receiving node directly.
    pub fn is_local_only(&self) -> bool {
        matches!(
            self,
            Plan::Other {
                scope: PlanScope::LocalOnly,
                ..
            }
        )
    }

    /// True for plans that must be forwarded to every partition group.
    pub fn is_global(&self) -> bool {
        matches!(
            self,
            Plan::Other {
                scope: PlanScope::Global,
                ..
            }
        )
    }

    /// True for plan kinds owned by the splitting entry point: their data may
    /// legitimately be owned by more than one partition group.
    pub fn is_splittable(&self) -> bool {
        matches!(
            self,
            Plan::Insert { .. }
                | Plan::BatchInsert { .. }
                | Plan::CreateTimeSeries { .. }
                | Plan::Count { .. }
                | Plan::ShowDevices { .. }
                | Plan::ShowTimeSeries { .. }
                | Plan::Update { .. }
        )
    }
}
