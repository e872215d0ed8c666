use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    constants::{ID_FIELD, OPERATOR_PREFIX},
    Result,
    StoreError,
};

/// A key-value record selecting documents in a collection.
///
/// Every condition must hold for a document to match. `_id` and `id`
/// conditions match either identity field of the document; every other
/// condition requires strict equality with the document's field. Query
/// operators such as `$gt` or `$in` are not interpreted: an operator object is
/// compared literally, like any other value.
///
/// An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filter {
    /// Field name to expected value.
    conditions: Map<String, Value>,
}

impl Filter {
    /// Creates an empty filter that matches every document.
    pub fn new() -> Self { Self::default() }

    /// Creates a filter selecting the document with the given id.
    pub fn by_id<S>(id: S) -> Self
    where
        S: Into<String>,
    {
        Self::new().with(ID_FIELD, Value::String(id.into()))
    }

    /// Adds an equality condition, replacing any previous condition on `field`.
    #[must_use]
    pub fn with<K, V>(mut self, field: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.conditions.insert(field.into(), value.into());
        self
    }

    /// Returns `true` when the filter has no conditions.
    pub fn is_empty(&self) -> bool { self.conditions.is_empty() }

    /// Returns the number of conditions.
    pub fn len(&self) -> usize { self.conditions.len() }

    /// Returns the conditions of the filter.
    pub const fn conditions(&self) -> &Map<String, Value> { &self.conditions }

    /// Returns the fields whose condition looks like a query operator.
    ///
    /// A field qualifies when its own name starts with `$` (e.g. `$or`) or its
    /// value is an object with a `$`-prefixed key (e.g. `{"$gte": 3}`). Such
    /// conditions are matched literally and will almost never select anything.
    pub fn operator_fields(&self) -> Vec<&str> {
        self.conditions
            .iter()
            .filter(|&(field, value)| field.starts_with(OPERATOR_PREFIX) || is_operator_object(value))
            .map(|(field, _)| field.as_str())
            .collect()
    }
}

/// Whether `value` is an object carrying at least one `$`-prefixed key.
fn is_operator_object(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.keys().any(|key| key.starts_with(OPERATOR_PREFIX)))
}

impl From<Map<String, Value>> for Filter {
    fn from(conditions: Map<String, Value>) -> Self {
        Self {
            conditions,
        }
    }
}

impl TryFrom<Value> for Filter {
    type Error = StoreError;

    /// Translates a raw filter value.
    ///
    /// Objects become filters and `null` becomes the empty filter; any other
    /// value is rejected with `StoreError::InvalidFilter`.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(conditions) => Ok(Self::from(conditions)),
            Value::Null => Ok(Self::new()),
            other => {
                Err(StoreError::InvalidFilter {
                    reason: format!("expected a JSON object, got {}", other),
                })
            },
        }
    }
}
