// Rust guideline compliant 2026-10-17

//! Property-based tests for the envelope builder.
//!
//! These tests validate the truthiness rules across arbitrary inputs.

use proptest::prelude::*;
use replykit_core::{build_envelope, ResponseEnvelope, Truthy};
use serde_json::{json, Value};

/// Generates values that count as absent.
fn arb_falsy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!(false)),
        Just(json!(0)),
        Just(json!(0.0)),
        Just(json!("")),
    ]
}

/// Generates values that count as supplied.
fn arb_truthy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!(true)),
        (1i64..i64::MAX).prop_map(Value::from),
        (i64::MIN..0i64).prop_map(Value::from),
        prop::string::string_regex(".{1,40}").unwrap().prop_map(Value::from),
        prop::collection::vec(any::<i32>(), 0..4).prop_map(Value::from),
        prop::collection::hash_map("[a-z]{1,8}", any::<i32>(), 0..4)
            .prop_map(|map| json!(map)),
    ]
}

proptest! {
    /// Falsy messages never produce a `message` field.
    #[test]
    fn test_falsy_message_omitted(status in any::<u16>(), message in arb_falsy()) {
        let envelope = build_envelope(status, message, Value::Null, Value::Null);
        prop_assert!(envelope.message().is_none());
        let serialized = envelope.to_json().unwrap();
        prop_assert!(serialized.get("message").is_none());
    }

    /// Truthy messages are kept exactly.
    #[test]
    fn test_truthy_message_kept(status in any::<u16>(), message in arb_truthy()) {
        prop_assert!(message.is_truthy());
        let envelope = build_envelope(status, message.clone(), Value::Null, Value::Null);
        prop_assert_eq!(envelope.message(), Some(&message));
    }

    /// Falsy payloads always become an empty object.
    #[test]
    fn test_falsy_data_empty(status in any::<u16>(), data in arb_falsy()) {
        let envelope = build_envelope(status, Value::Null, data, Value::Null);
        prop_assert_eq!(envelope.data(), &json!({}));
    }

    /// Status passes through unchanged and data is never null.
    #[test]
    fn test_status_passthrough(status in any::<u16>(), data in prop_oneof![arb_falsy(), arb_truthy()]) {
        let envelope = build_envelope(status, "msg", data, Value::Null);
        prop_assert_eq!(envelope.status(), status);
        prop_assert!(!envelope.data().is_null());
    }

    /// Serialized envelopes parse back to the same envelope.
    #[test]
    fn test_json_preserves_envelope(
        status in any::<u16>(),
        message in prop_oneof![arb_falsy(), arb_truthy()],
        data in prop_oneof![arb_falsy(), arb_truthy()],
        stack in prop::option::of("[a-z0-9-]{1,20}"),
    ) {
        let envelope = build_envelope(status, message, data, stack);
        let json = envelope.to_json_string().unwrap();
        let parsed = ResponseEnvelope::from_json_str(&json).unwrap();
        prop_assert_eq!(envelope, parsed);
    }
}
