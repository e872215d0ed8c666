use serde::Serialize;
use tracing::{debug, trace};

use crate::{Collection, Filter, Result};
use super::stor::Store;

/// Document count of one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    /// Collection name
    pub name:      String,
    /// Number of documents it holds
    pub documents: u64,
}

/// Creates a collection handle bound to `store`.
///
/// This is an internal function used by the Store impl. Use `Store::collection` instead.
pub fn collection(store: &Store, name: &str) -> Collection {
    trace!("Accessing collection: {}", name);
    Collection {
        name:  name.to_owned(),
        store: store.clone(),
    }
}

/// Lists the collections of `store`.
///
/// This is an internal function used by the Store impl. Use `Store::collection_names` instead.
pub fn collection_names(store: &Store) -> Result<Vec<String>> { store.table().collection_names() }

/// Counts the documents of every collection of `store`.
///
/// This is an internal function used by the Store impl. Use `Store::stats` instead.
pub async fn stats(store: &Store) -> Result<Vec<CollectionStats>> {
    let mut stats = Vec::new();
    for name in collection_names(store)? {
        let documents = collection(store, &name)
            .count_documents(&Filter::new())
            .await?;
        stats.push(CollectionStats {
            name,
            documents,
        });
    }
    debug!("Collected stats for {} collections", stats.len());
    Ok(stats)
}
