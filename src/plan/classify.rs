use crate::plan::types::Plan;

/// Which routing entry point was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOp {
    Single,
    Split,
}

/// Why a plan was refused by the entry point named in `RouteOp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MisrouteReason {
    /// The plan must run on the receiving node, never routed.
    LocalOnly,
    /// The plan must be broadcast to every partition group.
    Global,
    /// The plan is owned by the other entry point.
    WrongOperation,
    /// The routing layer knows nothing about this plan kind.
    Unrecognized,
}

/// Diagnose why `plan` cannot be handled by the `attempted` entry point.
/// Pure; the logging-and-raising step lives with `RouteError`.
pub fn classify_misuse(plan: &Plan, attempted: RouteOp) -> MisrouteReason {
    if plan.is_local_only() {
        return MisrouteReason::LocalOnly;
    }
    if plan.is_global() {
        return MisrouteReason::Global;
    }
    match attempted {
        RouteOp::Single if plan.is_splittable() => MisrouteReason::WrongOperation,
        RouteOp::Split if matches!(plan, Plan::ShowChildPaths { .. }) => {
            MisrouteReason::WrongOperation
        }
        _ => MisrouteReason::Unrecognized,
    }
}
