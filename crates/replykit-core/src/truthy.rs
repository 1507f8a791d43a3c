// Rust guideline compliant 2026-10-17

//! Truthiness rules for envelope fields.
//!
//! A value is falsy when it is `null`, `false`, numeric zero or the empty
//! string. Everything else is truthy, including empty arrays and objects.

use serde_json::{Map, Value};

/// Truthiness test for payload values.
pub trait Truthy {
    /// Returns true if the value counts as supplied.
    fn is_truthy(&self) -> bool;

    /// Returns true if the value counts as absent.
    fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// Keeps a value only when it is truthy.
pub(crate) fn truthy_or_none(value: Value) -> Option<Value> {
    value.is_truthy().then_some(value)
}

/// Replaces a falsy value with an empty object.
pub(crate) fn truthy_or_empty(value: Value) -> Value {
    if value.is_truthy() {
        value
    } else {
        Value::Object(Map::new())
    }
}

/// Keeps any value except `null`.
pub(crate) fn present_or_none(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values() {
        for value in [json!(null), json!(false), json!(0), json!(-0.0), json!(0.0), json!("")] {
            assert!(value.is_falsy(), "{value} should be falsy");
        }
    }

    #[test]
    fn test_truthy_values() {
        for value in [json!(true), json!(1), json!(-3), json!(0.5), json!("0"), json!([]), json!({})] {
            assert!(value.is_truthy(), "{value} should be truthy");
        }
    }

    #[test]
    fn test_truthy_or_empty_keeps_arrays() {
        assert_eq!(truthy_or_empty(json!([1, 2])), json!([1, 2]));
        assert_eq!(truthy_or_empty(json!(0)), json!({}));
    }

    #[test]
    fn test_present_or_none_keeps_falsy_non_null() {
        assert_eq!(present_or_none(json!("")), Some(json!("")));
        assert_eq!(present_or_none(json!(false)), Some(json!(false)));
        assert_eq!(present_or_none(Value::Null), None);
    }
}
