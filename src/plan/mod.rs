pub mod batch;
pub mod classify;
pub mod types;

pub use types::Plan;
