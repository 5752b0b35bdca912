//! Tests for message construction and serialization.

use nova_core::{Message, Role};

#[test]
fn low_confidence_below_half() {
    let cases = [
        (Some(0.0), true),
        (Some(0.49), true),
        (Some(0.5), false),
        (Some(0.95), false),
        (None, false),
    ];
    for (confidence, expected) in cases {
        let msg = Message::assistant("x").with_confidence(confidence);
        assert_eq!(msg.is_low_confidence(), expected, "confidence {confidence:?}");
    }
}

#[test]
fn model_role_is_assistant() {
    let role: Role = serde_json::from_str("\"model\"").unwrap();
    assert_eq!(role, Role::Assistant);
    assert_eq!(serde_json::to_string(&role).unwrap(), "\"assistant\"");
}

#[test]
fn history_names() {
    assert_eq!(Role::User.history_name(), "user");
    assert_eq!(Role::Assistant.history_name(), "model");
}

#[test]
fn deserialize_without_timestamp() {
    let msg: Message =
        serde_json::from_str(r#"{"role":"assistant","content":"hello"}"#).unwrap();
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.content, "hello");
    assert!(msg.confidence.is_none());
}
