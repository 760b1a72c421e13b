//! Wire-shape serialization tests for the conversation model.

use saathi_types::{Language, Role, Turn};

#[test]
fn turn_serializes_to_wire_shape() {
    let turn = Turn::user("I have a fever");
    let json = serde_json::to_value(&turn).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"role": "user", "content": "I have a fever"})
    );
}

#[test]
fn assistant_turn_round_trips() {
    let turn = Turn::assistant("Please rest.");
    let json = serde_json::to_string(&turn).unwrap();
    let back: Turn = serde_json::from_str(&json).unwrap();
    assert_eq!(back, turn);
    assert_eq!(back.role, Role::Assistant);
}

#[test]
fn language_tags_match_protocol() {
    assert_eq!(serde_json::to_value(Language::En).unwrap(), "en");
    assert_eq!(serde_json::to_value(Language::Hi).unwrap(), "hi");
    let hi: Language = serde_json::from_str("\"hi\"").unwrap();
    assert_eq!(hi, Language::Hi);
}

#[test]
fn role_deserializes_from_lowercase() {
    let role: Role = serde_json::from_str("\"assistant\"").unwrap();
    assert_eq!(role, Role::Assistant);
}
