/// Store operations.
pub mod operations;
/// Store implementation.
pub mod stor;
/// Store tests.
pub mod tests;

pub use operations::CollectionStats;
pub use stor::Store;
