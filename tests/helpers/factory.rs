pub use super::factories::{MetaResolverFactory, PartitionTableFactory, PlanFactory};

use crate::plan::types::PlanScope;

pub struct Factory;

impl Factory {
    pub fn insert_plan() -> PlanFactory {
        PlanFactory::insert()
    }

    pub fn batch_insert_plan() -> PlanFactory {
        PlanFactory::batch_insert()
    }

    pub fn create_time_series_plan() -> PlanFactory {
        PlanFactory::create_time_series()
    }

    pub fn show_child_paths_plan() -> PlanFactory {
        PlanFactory::show_child_paths()
    }

    pub fn show_devices_plan() -> PlanFactory {
        PlanFactory::show_devices()
    }

    pub fn show_time_series_plan() -> PlanFactory {
        PlanFactory::show_time_series()
    }

    pub fn count_plan() -> PlanFactory {
        PlanFactory::count()
    }

    pub fn update_plan() -> PlanFactory {
        PlanFactory::update()
    }

    pub fn other_plan(name: &str, scope: PlanScope) -> PlanFactory {
        PlanFactory::other(name, scope)
    }

    pub fn partition_table() -> PartitionTableFactory {
        PartitionTableFactory::new()
    }

    pub fn meta_resolver() -> MetaResolverFactory {
        MetaResolverFactory::new()
    }
}
