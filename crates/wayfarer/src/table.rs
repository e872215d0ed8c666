//! Raw in-memory storage for collections.

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use tracing::trace;

use crate::{Document, Result, StoreError};

/// Maps collection names to their ordered lists of documents.
///
/// The table is pure storage: it performs no validation, no filtering and no
/// id handling. Access goes through closures that receive the live list, so
/// callers mutate the table's state in place and must clone explicitly when
/// they need an isolated copy. Unknown collection names read as empty; the
/// mutable accessor creates them on first use.
#[derive(Debug, Default)]
pub struct DocumentTable {
    /// Collection name to documents, in insertion order.
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl DocumentTable {
    /// Creates an empty table.
    pub fn new() -> Self { Self::default() }

    /// Runs `f` with read access to the documents of `name`.
    ///
    /// A collection that was never written reads as an empty slice.
    ///
    /// # Returns
    ///
    /// Returns whatever `f` returns, or `StoreError::LockFailed` if a writer
    /// panicked while holding the table lock.
    pub fn with_collection<R, F>(&self, name: &str, f: F) -> Result<R>
    where
        F: FnOnce(&[Document]) -> R,
    {
        let collections = self
            .collections
            .read()
            .map_err(|e| lock_failed(&e))?;
        let docs = collections.get(name).map_or(&[][..], Vec::as_slice);
        Ok(f(docs))
    }

    /// Runs `f` with mutable access to the live list of `name`, creating it if absent.
    ///
    /// # Returns
    ///
    /// Returns whatever `f` returns, or `StoreError::LockFailed` if a writer
    /// panicked while holding the table lock.
    pub fn with_collection_mut<R, F>(&self, name: &str, f: F) -> Result<R>
    where
        F: FnOnce(&mut Vec<Document>) -> R,
    {
        let mut collections = self
            .collections
            .write()
            .map_err(|e| lock_failed(&e))?;
        let docs = collections.entry(name.to_owned()).or_insert_with(|| {
            trace!("Creating collection {} on first write", name);
            Vec::new()
        });
        Ok(f(docs))
    }

    /// Returns the names of every collection created so far, sorted.
    pub fn collection_names(&self) -> Result<Vec<String>> {
        let collections = self
            .collections
            .read()
            .map_err(|e| lock_failed(&e))?;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort_unstable();
        Ok(names)
    }
}

/// Maps a poisoned lock to a store error.
fn lock_failed<T>(err: &PoisonError<T>) -> StoreError {
    StoreError::LockFailed {
        reason: format!("document table lock poisoned: {}", err),
    }
}
