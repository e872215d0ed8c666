//! In-memory mock document store for the Wayfarer travel CMS.
//!
//! The store exposes a MongoDB-shaped collection API over an in-process table
//! of JSON documents, plus an idempotent seeder that fills empty collections
//! with sample travel content. Nothing is persisted.

pub mod collection;
pub mod comparison;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod filtering;
pub mod query;
pub mod results;
pub mod seed;
pub mod store;
pub mod table;
pub mod update;

pub use collection::Collection;
pub use config::StoreConfig;
pub use document::Document;
pub use error::{Result, StoreError};
pub use query::Filter;
pub use results::{DeleteResult, InsertOneResult, UpdateResult};
pub use seed::{SeedOutcome, SeedReport};
pub use store::{CollectionStats, Store};
pub use update::{Update, UpdateOperator};
