//! Update operators applied by `update_one`.
//!
//! Callers hand the store raw update objects in MongoDB shape. They are
//! translated once, at the boundary, into a list of tagged operators:
//!
//! - `{"$set": {...}}` becomes one [`UpdateOperator::Set`];
//! - `{"$inc": {"a": 1, "b": 2}}` becomes one [`UpdateOperator::Increment`] per field;
//! - `{"$push": {"a": x}}` becomes one [`UpdateOperator::Push`] per field;
//! - an object with none of those keys becomes a single [`UpdateOperator::Replace`] that merges the whole object, like an
//!   implicit `$set`.

use serde_json::{Map, Number, Value};
use tracing::{trace, warn};

use crate::{
    constants::{INC_OPERATOR, OPERATOR_PREFIX, PUSH_OPERATOR, SET_OPERATOR},
    Document,
    Result,
    StoreError,
};

/// A single modification of a document.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOperator {
    /// Shallow-merge the fields into the document.
    Set(Map<String, Value>),
    /// Add `delta` to a numeric field; a missing field counts as zero.
    Increment {
        /// Field to increment.
        field: String,
        /// Amount to add.
        delta: Number,
    },
    /// Append `value` to an array field, creating the array if absent.
    Push {
        /// Array field to append to.
        field: String,
        /// Value to append.
        value: Value,
    },
    /// Merge an update object that carried no recognized operator.
    Replace(Map<String, Value>),
}

/// An ordered list of operators applied to the first matching document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    /// Operators, applied in order.
    operators: Vec<UpdateOperator>,
}

impl Update {
    /// Creates an update that shallow-merges `fields`.
    pub fn set(fields: Map<String, Value>) -> Self { Self::from_operator(UpdateOperator::Set(fields)) }

    /// Creates an update that sets a single field.
    pub fn set_field<K, V>(field: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut fields = Map::new();
        fields.insert(field.into(), value.into());
        Self::set(fields)
    }

    /// Creates an update that adds `delta` to `field`.
    pub fn inc<K, N>(field: K, delta: N) -> Self
    where
        K: Into<String>,
        N: Into<Number>,
    {
        Self::from_operator(UpdateOperator::Increment {
            field: field.into(),
            delta: delta.into(),
        })
    }

    /// Creates an update that appends `value` to the array in `field`.
    pub fn push<K, V>(field: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::from_operator(UpdateOperator::Push {
            field: field.into(),
            value: value.into(),
        })
    }

    /// Creates an update that merges `fields` as-is.
    pub fn replace(fields: Map<String, Value>) -> Self { Self::from_operator(UpdateOperator::Replace(fields)) }

    /// Creates an update from a single operator.
    pub fn from_operator(operator: UpdateOperator) -> Self {
        Self {
            operators: vec![operator],
        }
    }

    /// Appends the operators of `next` after this update's operators.
    #[must_use]
    pub fn and_then(mut self, next: Self) -> Self {
        self.operators.extend(next.operators);
        self
    }

    /// Returns the operators in application order.
    pub fn operators(&self) -> &[UpdateOperator] { &self.operators }

    /// Returns `true` when the update carries no operator.
    pub fn is_empty(&self) -> bool { self.operators.is_empty() }

    /// Applies every operator, in order, to `doc`.
    ///
    /// Identity fields are not protected here; callers realign `_id`/`id`
    /// afterwards.
    pub(crate) fn apply(&self, doc: &mut Document) {
        for operator in &self.operators {
            apply_operator(doc.fields_mut(), operator);
        }
    }
}

/// Applies one operator to a document's fields.
fn apply_operator(fields: &mut Map<String, Value>, operator: &UpdateOperator) {
    match operator {
        UpdateOperator::Set(values) | UpdateOperator::Replace(values) => {
            for (key, value) in values {
                fields.insert(key.clone(), value.clone());
            }
        },
        UpdateOperator::Increment {
            field,
            delta,
        } => {
            let current = match fields.get(field) {
                None | Some(Value::Null) => None,
                Some(Value::Number(n)) => Some(n.clone()),
                Some(other) => {
                    warn!(
                        "Field {} holds non-numeric value {}, incrementing from zero",
                        field, other
                    );
                    None
                },
            };
            match add_numbers(current.as_ref(), delta) {
                Some(sum) => {
                    trace!("Incremented field {} to {}", field, sum);
                    fields.insert(field.clone(), Value::Number(sum));
                },
                None => warn!("Increment of field {} by {} is not a finite number, skipping", field, delta),
            }
        },
        UpdateOperator::Push {
            field,
            value,
        } => {
            match fields.get_mut(field) {
                Some(Value::Array(items)) => items.push(value.clone()),
                None | Some(Value::Null) => {
                    fields.insert(field.clone(), Value::Array(vec![value.clone()]));
                },
                Some(other) => {
                    warn!(
                        "Field {} is not an array, wrapping existing value before push",
                        field
                    );
                    let existing = other.take();
                    *other = Value::Array(vec![existing, value.clone()]);
                },
            }
        },
    }
}

/// Adds two JSON numbers, keeping integers exact when both sides are integers.
fn add_numbers(current: Option<&Number>, delta: &Number) -> Option<Number> {
    let Some(current) = current
    else {
        return Some(delta.clone());
    };
    if let (Some(a), Some(b)) = (current.as_i64(), delta.as_i64()) {
        if let Some(sum) = a.checked_add(b) {
            return Some(Number::from(sum));
        }
    }
    let a = current.as_f64()?;
    let b = delta.as_f64()?;
    Number::from_f64(a + b)
}

impl From<UpdateOperator> for Update {
    fn from(operator: UpdateOperator) -> Self { Self::from_operator(operator) }
}

impl TryFrom<Value> for Update {
    type Error = StoreError;

    /// Translates a raw update object into tagged operators.
    ///
    /// Recognized operator keys are translated in key order. An object without
    /// any of `$set`, `$inc` or `$push` is merged wholesale, even when it holds
    /// other `$`-prefixed keys. When recognized operators are present, other
    /// `$`-prefixed keys are ignored with a warning and plain keys are merged.
    ///
    /// # Returns
    ///
    /// Returns the update, or `StoreError::InvalidUpdate` when the value is not
    /// an object, when `$set`/`$inc`/`$push` do not hold objects, or when an
    /// `$inc` delta is not a number.
    fn try_from(value: Value) -> Result<Self> {
        let raw = match value {
            Value::Object(raw) => raw,
            other => {
                return Err(StoreError::InvalidUpdate {
                    reason: format!("expected a JSON object, got {}", other),
                });
            },
        };

        let has_operator = [SET_OPERATOR, INC_OPERATOR, PUSH_OPERATOR]
            .iter()
            .any(|op| raw.contains_key(*op));
        if !has_operator {
            trace!("Update has no recognized operator, merging whole object");
            return Ok(Self::replace(raw));
        }

        let mut operators = Vec::new();
        let mut plain = Map::new();
        for (key, payload) in raw {
            match key.as_str() {
                SET_OPERATOR => operators.push(UpdateOperator::Set(operator_object(&key, payload)?)),
                INC_OPERATOR => {
                    for (field, delta) in operator_object(&key, payload)? {
                        let delta = match delta {
                            Value::Number(delta) => delta,
                            other => {
                                return Err(StoreError::InvalidUpdate {
                                    reason: format!("$inc delta for '{}' must be a number, got {}", field, other),
                                });
                            },
                        };
                        operators.push(UpdateOperator::Increment {
                            field,
                            delta,
                        });
                    }
                },
                PUSH_OPERATOR => {
                    for (field, value) in operator_object(&key, payload)? {
                        operators.push(UpdateOperator::Push {
                            field,
                            value,
                        });
                    }
                },
                other if other.starts_with(OPERATOR_PREFIX) => {
                    warn!("Unsupported update operator {} ignored", other);
                },
                _ => {
                    plain.insert(key, payload);
                },
            }
        }
        if !plain.is_empty() {
            operators.push(UpdateOperator::Replace(plain));
        }

        Ok(Self {
            operators,
        })
    }
}

/// Extracts the object payload of an update operator.
fn operator_object(operator: &str, payload: Value) -> Result<Map<String, Value>> {
    match payload {
        Value::Object(fields) => Ok(fields),
        other => {
            Err(StoreError::InvalidUpdate {
                reason: format!("{} expects an object, got {}", operator, other),
            })
        },
    }
}
