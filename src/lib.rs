pub mod cluster;
pub mod logging;
pub mod plan;
pub mod shared;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
