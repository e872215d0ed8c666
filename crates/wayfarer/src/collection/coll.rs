use tracing::warn;

use crate::{Filter, Store};

/// A handle to a named collection of a [`Store`].
///
/// Handles are cheap to create and clone: they hold the collection name and a
/// clone of the store handle, and every operation goes straight to the store's
/// document table. A collection does not need to exist before a handle is
/// created; unknown collections behave as empty until the first insert.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use wayfarer_store::{Filter, Store, StoreConfig, Update};
///
/// # async fn example() -> wayfarer_store::Result<()> {
/// let store = Store::with_config(StoreConfig::unseeded())?;
/// let posts = store.collection("posts");
///
/// let inserted = posts
///     .insert_one(json!({"title": "Lisbon in three days", "likes": 5}))
///     .await?;
///
/// // `_id` and `id` are interchangeable in filters.
/// let by_alias = Filter::new().with("id", inserted.inserted_id.clone());
/// posts.update_one(&by_alias, &Update::inc("likes", 1)).await?;
///
/// let post = posts.find_one(&Filter::by_id(inserted.inserted_id)).await?;
/// assert_eq!(post.unwrap()["likes"], json!(6));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
#[allow(
    clippy::field_scoped_visibility_modifiers,
    reason = "fields need to be pub(crate) for internal access"
)]
pub struct Collection {
    /// The name of the collection.
    pub(crate) name:  String,
    /// The store owning the collection's documents.
    pub(crate) store: Store,
}

impl Collection {
    /// Returns the name of the collection.
    pub fn name(&self) -> &str { &self.name }

    /// Returns the store this collection belongs to.
    pub const fn store(&self) -> &Store { &self.store }

    /// Reports filter conditions that look like query operators.
    ///
    /// Operators are matched literally, so a filter such as
    /// `{"date": {"$gte": ...}}` selects nothing. This is logged rather than
    /// evaluated.
    pub(crate) fn warn_on_operators(&self, filter: &Filter) {
        if !self.store.config().warn_on_query_operators {
            return;
        }
        let fields = filter.operator_fields();
        if !fields.is_empty() {
            warn!(
                "Filter on collection {} uses query operators in {:?}; they are compared literally, not evaluated",
                self.name, fields
            );
        }
    }
}
