
pub use meta_resolver_factory::MetaResolverFactory;
pub use partition_table_factory::PartitionTableFactory;
pub use plan_factory::PlanFactory;

#[cfg(test)]
mod meta_resolver_factory_test;
