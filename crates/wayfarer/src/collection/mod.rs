/// Core collection handle.
pub mod coll;
/// Collection operations.
pub mod operations;

pub use coll::*;
