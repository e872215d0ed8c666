use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::{
    comparison::coerce_to_string,
    constants::{ID_ALIAS_FIELD, ID_FIELD},
    Result,
    StoreError,
};

/// Represents a document stored in a collection.
///
/// A document is an open-ended JSON object. The store only ever looks at two
/// of its fields: `_id`, the canonical identifier, and `id`, a mirror of it.
/// Once a document has been stored both fields hold the same string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    /// The fields of the document, including `_id` and `id` once stored.
    fields: Map<String, Value>,
}

impl Document {
    /// Creates a document from a map of fields.
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self {
            fields,
        }
    }

    /// Creates a document from an arbitrary JSON value.
    ///
    /// # Arguments
    ///
    /// * `collection` - Name of the target collection, used for error reporting.
    /// * `value` - The document data; must be a JSON object.
    ///
    /// # Returns
    ///
    /// Returns the document, or `StoreError::InvalidDocument` when `value` is
    /// not an object.
    pub fn from_value(collection: &str, value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self::new(fields)),
            other => {
                Err(StoreError::InvalidDocument {
                    collection: collection.to_owned(),
                    reason:     format!("expected a JSON object, got {}", json_type_name(&other)),
                })
            },
        }
    }

    /// Returns the canonical identifier, if the document has been assigned one.
    pub fn id(&self) -> Option<&str> { self.fields.get(ID_FIELD).and_then(Value::as_str) }

    /// Returns the value of a field.
    pub fn get(&self, field: &str) -> Option<&Value> { self.fields.get(field) }

    /// Returns all fields of the document.
    pub const fn fields(&self) -> &Map<String, Value> { &self.fields }

    /// Returns all fields of the document for in-place modification.
    pub(crate) const fn fields_mut(&mut self) -> &mut Map<String, Value> { &mut self.fields }

    /// Consumes the document and returns it as a JSON object.
    pub fn into_value(self) -> Value { Value::Object(self.fields) }

    /// Returns the identifier supplied by the caller, preferring `_id` over `id`.
    ///
    /// Empty strings and `null` count as absent. Non-string ids are converted to
    /// their string form.
    pub fn supplied_id(&self) -> Option<String> {
        [ID_FIELD, ID_ALIAS_FIELD]
            .iter()
            .filter_map(|field| self.fields.get(*field))
            .find(|value| is_present_id(value))
            .map(|value| coerce_to_string(Some(value)))
    }

    /// Writes `id` into both identity fields.
    pub(crate) fn assign_id(&mut self, id: &str) {
        trace!("Assigning id {} to document", id);
        self.fields
            .insert(ID_FIELD.to_owned(), Value::String(id.to_owned()));
        self.fields
            .insert(ID_ALIAS_FIELD.to_owned(), Value::String(id.to_owned()));
    }

    /// Restores `id == _id` after the document's fields were modified.
    ///
    /// If `_id` changed it wins and `id` follows it; otherwise a changed `id` is
    /// copied to `_id`. When neither field holds a usable value the previous id is
    /// restored.
    pub(crate) fn realign_ids(&mut self, previous: Option<&str>) {
        let canonical = self
            .fields
            .get(ID_FIELD)
            .filter(|value| is_present_id(value))
            .map(|value| coerce_to_string(Some(value)));
        let alias = self
            .fields
            .get(ID_ALIAS_FIELD)
            .filter(|value| is_present_id(value))
            .map(|value| coerce_to_string(Some(value)));

        let resolved = match (canonical, alias) {
            (Some(canonical), _) if previous != Some(canonical.as_str()) => Some(canonical),
            (_, Some(alias)) if previous != Some(alias.as_str()) => Some(alias),
            (Some(canonical), _) => Some(canonical),
            (None, Some(alias)) => Some(alias),
            (None, None) => previous.map(str::to_owned),
        };

        if let Some(id) = resolved {
            self.assign_id(&id);
        }
    }
}

impl From<Map<String, Value>> for Document {
    fn from(fields: Map<String, Value>) -> Self { Self::new(fields) }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self { doc.into_value() }
}

impl std::ops::Index<&str> for Document {
    type Output = Value;

    /// Returns the field value, or `Value::Null` when the field is missing.
    fn index(&self, field: &str) -> &Value { self.fields.get(field).unwrap_or(&Value::Null) }
}

/// Generates a new opaque document id.
///
/// # Arguments
///
/// * `length` - Optional id length; `None` uses the cuid2 default.
pub fn generate_id(length: Option<u16>) -> String {
    match length {
        Some(length) => {
            cuid2::CuidConstructor::new()
                .with_length(length)
                .create_id()
        },
        None => cuid2::create_id(),
    }
}

/// Whether a stored id value counts as set.
fn is_present_id(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Human-readable name of a JSON value's type.
const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
