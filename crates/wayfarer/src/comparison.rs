//! Comparison utilities for matching JSON values.
//!
//! Documents reach the store from loosely typed callers, so equality follows
//! script-style strict equality: numbers compare by value regardless of their
//! integer/float representation, everything else compares structurally.

use serde_json::{Number, Value};

/// Largest magnitude at which a whole `f64` still prints without an exponent.
const MAX_PLAIN_WHOLE_FLOAT: f64 = 1e21;

/// Checks two values for strict equality.
///
/// `1` and `1.0` are equal; `1` and `"1"` are not. Arrays and objects are equal
/// when they have the same shape and strictly equal members.
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(na), Value::Number(nb)) => numbers_equal(na, nb),
        (Value::Array(aa), Value::Array(ab)) => {
            aa.len() == ab.len() && aa.iter().zip(ab).all(|(x, y)| strict_equals(x, y))
        },
        (Value::Object(oa), Value::Object(ob)) => {
            oa.len() == ob.len() &&
                oa.iter()
                    .all(|(key, x)| ob.get(key).is_some_and(|y| strict_equals(x, y)))
        },
        _ => a == b,
    }
}

/// Compares two JSON numbers by value.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        #[allow(clippy::float_cmp, reason = "strict equality is the intended semantics")]
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Converts an optional value to the string form used when comparing ids.
///
/// A missing value becomes `"undefined"` and `null` becomes `"null"`, so a
/// document without an id never matches a real id. Whole floats print without
/// a fractional part (`3.0` becomes `"3"`), arrays join their elements with
/// commas and objects print as `"[object Object]"`.
pub fn coerce_to_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_owned(),
        Some(Value::Null) => "null".to_owned(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_to_string(n),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => {
            items
                .iter()
                .map(|item| {
                    match item {
                        Value::Null => String::new(),
                        other => coerce_to_string(Some(other)),
                    }
                })
                .collect::<Vec<_>>()
                .join(",")
        },
        Some(Value::Object(_)) => "[object Object]".to_owned(),
    }
}

/// Prints a number the way a script runtime would.
fn number_to_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < MAX_PLAIN_WHOLE_FLOAT => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_strict_equals_numbers_across_representations() {
        assert!(strict_equals(&json!(1), &json!(1.0)));
        assert!(strict_equals(&json!(-7), &json!(-7)));
        assert!(strict_equals(&json!(2.5), &json!(2.5)));
        assert!(!strict_equals(&json!(1), &json!(2)));
    }

    #[test]
    fn test_strict_equals_never_coerces_types() {
        assert!(!strict_equals(&json!(1), &json!("1")));
        assert!(!strict_equals(&json!(true), &json!(1)));
        assert!(!strict_equals(&json!(null), &json!(false)));
        assert!(!strict_equals(&json!(""), &json!(null)));
    }

    #[test]
    fn test_strict_equals_strings_are_exact() {
        assert!(strict_equals(&json!("Beaches"), &json!("Beaches")));
        assert!(!strict_equals(&json!("Beaches"), &json!("Beach")));
        assert!(!strict_equals(&json!("beaches"), &json!("Beaches")));
    }

    #[test]
    fn test_strict_equals_nested() {
        assert!(strict_equals(
            &json!({"a": [1, 2.0, {"b": "c"}]}),
            &json!({"a": [1.0, 2, {"b": "c"}]})
        ));
        assert!(!strict_equals(&json!([1, 2]), &json!([1, 2, 3])));
        assert!(!strict_equals(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!strict_equals(&json!({"a": 1}), &json!({"b": 1})));
    }

    #[test]
    fn test_coerce_to_string() {
        assert_eq!(coerce_to_string(None), "undefined");
        assert_eq!(coerce_to_string(Some(&json!(null))), "null");
        assert_eq!(coerce_to_string(Some(&json!(true))), "true");
        assert_eq!(coerce_to_string(Some(&json!(42))), "42");
        assert_eq!(coerce_to_string(Some(&json!(3.0))), "3");
        assert_eq!(coerce_to_string(Some(&json!(3.25))), "3.25");
        assert_eq!(coerce_to_string(Some(&json!("abc"))), "abc");
        assert_eq!(coerce_to_string(Some(&json!([1, null, "x"]))), "1,,x");
        assert_eq!(
            coerce_to_string(Some(&json!({"k": "v"}))),
            "[object Object]"
        );
    }
}
