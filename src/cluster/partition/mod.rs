pub mod group;
pub mod interval;
pub mod table;

pub use group::PartitionGroup;
pub use interval::bucket_start;
pub use table::PartitionTable;
