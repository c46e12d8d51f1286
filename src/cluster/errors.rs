use thiserror::Error;
use tracing::error;

use crate::plan::classify::{MisrouteReason, RouteOp, classify_misuse};
use crate::plan::types::Plan;

/// Failures surfaced by the metadata resolver collaborators.
#[derive(Debug, Error)]
pub enum MetaError {
    #[error("Illegal path: {0}")]
    IllegalPath(String),

    #[error("No storage group set for path: {0}")]
    StorageGroupNotSet(String),
}

/// Failures of the routing layer itself.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Unsupported plan kind: {0}")]
    UnsupportedPlanKind(String),

    #[error("No storage group matches path: {0}")]
    StorageGroupNotFound(String),

    #[error("Metadata resolution failed: {0}")]
    Meta(#[from] MetaError),
}

impl RouteError {
    /// Shared rejection path of both entry points: log the operator-facing
    /// diagnosis for the plan, then build the error. The returned value is
    /// `UnsupportedPlanKind` whatever the diagnosis was.
    pub(crate) fn unsupported(plan: &Plan, attempted: RouteOp) -> RouteError {
        let kind = plan.kind_name();
        match classify_misuse(plan, attempted) {
            MisrouteReason::LocalOnly => {
                error!(
                    target: "cluster::route",
                    plan = kind,
                    "Local-only plan; execute it on the receiving node directly"
                );
            }
            MisrouteReason::Global => {
                error!(
                    target: "cluster::route",
                    plan = kind,
                    "Global plan; forward it to every partition group instead of routing"
                );
            }
            MisrouteReason::WrongOperation => match attempted {
                RouteOp::Single => {
                    error!(
                        target: "cluster::route",
                        plan = kind,
                        "Plan can span partitions; use split_and_route"
                    );
                }
                RouteOp::Split => {
                    error!(
                        target: "cluster::route",
                        plan = kind,
                        "Plan targets a single partition; use route_single"
                    );
                }
            },
            MisrouteReason::Unrecognized => {}
        }
        RouteError::UnsupportedPlanKind(kind.to_string())
    }
}
