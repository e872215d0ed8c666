use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::{
    document::generate_id,
    filtering::matches_filter,
    Document,
    DeleteResult,
    Filter,
    InsertOneResult,
    Result,
    Update,
    UpdateResult,
};
use super::coll::Collection;

impl Collection {
    /// Returns every document matching the filter, in insertion order.
    ///
    /// With an empty filter the whole collection is returned. The result is
    /// always a copy: mutating it never changes the store, so writes must go
    /// through `insert_one`, `update_one` or `delete_one`.
    ///
    /// # Arguments
    ///
    /// * `filter` - Conditions every returned document satisfies.
    ///
    /// # Returns
    ///
    /// Returns the matching documents (possibly none). An unknown collection
    /// yields an empty list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use wayfarer_store::{Filter, Store, StoreConfig};
    ///
    /// # async fn example() -> wayfarer_store::Result<()> {
    /// let store = Store::with_config(StoreConfig::unseeded())?;
    /// let posts = store.collection("posts");
    /// posts.insert_one(json!({"title": "Reef", "category": "Beaches"})).await?;
    /// posts.insert_one(json!({"title": "Peak", "category": "Mountains"})).await?;
    ///
    /// let beaches = posts.find(&Filter::new().with("category", "Beaches")).await?;
    /// assert_eq!(beaches.len(), 1);
    /// assert_eq!(posts.find(&Filter::new()).await?.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find(&self, filter: &Filter) -> Result<Vec<Document>> {
        trace!(
            "Finding documents in collection {} with {} conditions",
            self.name,
            filter.len()
        );
        self.warn_on_operators(filter);
        let docs = self.store.table().with_collection(&self.name, |docs| {
            if filter.is_empty() {
                docs.to_vec()
            }
            else {
                docs.iter()
                    .filter(|doc| matches_filter(doc, filter))
                    .cloned()
                    .collect::<Vec<_>>()
            }
        })?;
        debug!(
            "Found {} documents in collection {}",
            docs.len(),
            self.name
        );
        Ok(docs)
    }

    /// Returns the first document matching the filter.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` when nothing matches; a missing document is not an error.
    pub async fn find_one(&self, filter: &Filter) -> Result<Option<Document>> {
        trace!(
            "Finding one document in collection {} with {} conditions",
            self.name,
            filter.len()
        );
        self.warn_on_operators(filter);
        let doc = self.store.table().with_collection(&self.name, |docs| {
            docs.iter()
                .find(|doc| matches_filter(doc, filter))
                .cloned()
        })?;
        if doc.is_none() {
            debug!("No document in collection {} matched", self.name);
        }
        Ok(doc)
    }

    /// Appends a document to the collection.
    ///
    /// The document keeps a caller-supplied `_id` (or, failing that, `id`);
    /// otherwise a new opaque id is generated. Both identity fields are set to
    /// that id before the document is stored. Ids are not checked for
    /// uniqueness.
    ///
    /// # Arguments
    ///
    /// * `data` - The document to store; must be a JSON object.
    ///
    /// # Returns
    ///
    /// Returns the stored document and its id, or
    /// `StoreError::InvalidDocument` when `data` is not an object.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use wayfarer_store::{Store, StoreConfig};
    ///
    /// # async fn example() -> wayfarer_store::Result<()> {
    /// let store = Store::with_config(StoreConfig::unseeded())?;
    /// let categories = store.collection("categories");
    ///
    /// let generated = categories.insert_one(json!({"name": "Islands"})).await?;
    /// assert_eq!(generated.document["id"], generated.document["_id"]);
    ///
    /// let supplied = categories.insert_one(json!({"id": "deserts", "name": "Deserts"})).await?;
    /// assert_eq!(supplied.inserted_id, "deserts");
    /// assert_eq!(supplied.document["_id"], json!("deserts"));
    /// # Ok(())
    /// # }
    /// ```
    pub async fn insert_one(&self, data: Value) -> Result<InsertOneResult> {
        trace!("Inserting document into collection {}", self.name);
        let mut doc = Document::from_value(&self.name, data).map_err(|e| {
            warn!("Rejected insert into collection {}: {}", self.name, e);
            e
        })?;

        let id = doc
            .supplied_id()
            .unwrap_or_else(|| generate_id(self.store.config().id_length));
        doc.assign_id(&id);

        let stored = doc.clone();
        self.store
            .table()
            .with_collection_mut(&self.name, |docs| docs.push(stored))?;
        debug!(
            "Document {} inserted into collection {}",
            id, self.name
        );

        Ok(InsertOneResult {
            acknowledged: true,
            inserted_id:  id,
            document:     doc,
        })
    }

    /// Applies an update to the first document matching the filter.
    ///
    /// At most one document is modified per call, even when several match.
    /// After the update `_id` and `id` are realigned: a changed `_id` wins,
    /// otherwise a changed `id` is copied to `_id`. The document keeps its
    /// position in the collection.
    ///
    /// # Arguments
    ///
    /// * `filter` - Selects the document to update.
    /// * `update` - Operators to apply; see [`Update`].
    ///
    /// # Returns
    ///
    /// Returns counts of 1 when a document was updated and 0 when nothing
    /// matched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use wayfarer_store::{Filter, Store, StoreConfig, Update};
    ///
    /// # async fn example() -> wayfarer_store::Result<()> {
    /// let store = Store::with_config(StoreConfig::unseeded())?;
    /// let posts = store.collection("communityPosts");
    /// let post = posts.insert_one(json!({"title": "Hostels in Porto"})).await?;
    ///
    /// let raw = json!({"$push": {"replies": {"author": "ana", "text": "Try Gallery!"}}});
    /// let result = posts
    ///     .update_one(&Filter::by_id(post.inserted_id), &Update::try_from(raw)?)
    ///     .await?;
    /// assert_eq!(result.modified_count, 1);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_one(&self, filter: &Filter, update: &Update) -> Result<UpdateResult> {
        trace!(
            "Updating one document in collection {} with {} operators",
            self.name,
            update.operators().len()
        );
        self.warn_on_operators(filter);
        let updated_id = self
            .store
            .table()
            .with_collection_mut(&self.name, |docs| {
                let doc = docs.iter_mut().find(|doc| matches_filter(doc, filter))?;
                let previous = doc.id().map(str::to_owned);
                update.apply(doc);
                doc.realign_ids(previous.as_deref());
                Some(doc.id().map(str::to_owned))
            })?;

        match updated_id {
            Some(id) => {
                debug!(
                    "Document {:?} updated in collection {}",
                    id, self.name
                );
                Ok(UpdateResult::modified())
            },
            None => {
                debug!(
                    "No document in collection {} matched the update filter",
                    self.name
                );
                Ok(UpdateResult::unmatched())
            },
        }
    }

    /// Removes the first document matching the filter.
    ///
    /// # Returns
    ///
    /// Returns a deleted count of 1 when a document was removed and 0 when
    /// nothing matched. The remaining documents keep their order.
    pub async fn delete_one(&self, filter: &Filter) -> Result<DeleteResult> {
        trace!("Deleting one document from collection {}", self.name);
        self.warn_on_operators(filter);
        let removed = self
            .store
            .table()
            .with_collection_mut(&self.name, |docs| {
                let position = docs
                    .iter()
                    .position(|doc| matches_filter(doc, filter))?;
                Some(docs.remove(position))
            })?;

        match removed {
            Some(doc) => {
                debug!(
                    "Document {:?} deleted from collection {}",
                    doc.id(),
                    self.name
                );
                Ok(DeleteResult::new(1))
            },
            None => {
                debug!(
                    "No document in collection {} matched the delete filter",
                    self.name
                );
                Ok(DeleteResult::new(0))
            },
        }
    }

    /// Counts the documents matching the filter.
    ///
    /// An empty filter counts the whole collection.
    pub async fn count_documents(&self, filter: &Filter) -> Result<u64> {
        trace!("Counting documents in collection {}", self.name);
        self.warn_on_operators(filter);
        let count = self.store.table().with_collection(&self.name, |docs| {
            if filter.is_empty() {
                docs.len()
            }
            else {
                docs.iter()
                    .filter(|doc| matches_filter(doc, filter))
                    .count()
            }
        })?;
        Ok(count as u64)
    }
}
