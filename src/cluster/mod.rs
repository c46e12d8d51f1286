pub mod batch_split;
pub mod errors;
pub mod meta;
pub mod partition;
pub mod router;
pub mod splitter;

pub use errors::{MetaError, RouteError};
pub use router::Router;
pub use splitter::{RoutedPlans, Splitter};
