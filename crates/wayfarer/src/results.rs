//! Acknowledgments returned by write operations.

use serde::Serialize;

use crate::Document;

/// The result of `insert_one`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    /// Whether the store performed the write
    pub acknowledged: bool,
    /// The id under which the document was stored
    pub inserted_id:  String,
    /// The stored document, including `_id` and `id`
    pub document:     Document,
}

/// The result of `update_one`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    /// Whether the store performed the write
    pub acknowledged:   bool,
    /// Number of documents that matched the filter (0 or 1)
    pub matched_count:  u64,
    /// Number of documents the update was applied to (0 or 1)
    pub modified_count: u64,
}

impl UpdateResult {
    /// No document matched.
    pub const fn unmatched() -> Self {
        Self {
            acknowledged:   true,
            matched_count:  0,
            modified_count: 0,
        }
    }

    /// One document matched and was updated.
    pub const fn modified() -> Self {
        Self {
            acknowledged:   true,
            matched_count:  1,
            modified_count: 1,
        }
    }
}

/// The result of `delete_one`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    /// Whether the store performed the write
    pub acknowledged:  bool,
    /// Number of documents removed (0 or 1)
    pub deleted_count: u64,
}

impl DeleteResult {
    /// Creates an acknowledged result for `deleted_count` removals.
    pub const fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
