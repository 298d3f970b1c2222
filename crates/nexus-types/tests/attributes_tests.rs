use nexus_types::*;
use serde_json::json;

#[test]
fn test_attributes_from_mapping() {
    let attrs = KeyAttributes::from_value(&json!({"name": "Alice Smith"})).unwrap();
    assert_eq!(attrs.name.as_deref(), Some("Alice Smith"));
}

#[test]
fn test_attributes_ignore_unknown_fields() {
    let attrs = KeyAttributes::from_value(&json!({"email": "a@example.com"})).unwrap();
    assert_eq!(attrs, KeyAttributes::default());
}

#[test]
fn test_attributes_reject_non_string_name() {
    assert!(KeyAttributes::from_value(&json!({"name": 42})).is_err());
}

#[test]
fn test_decoded_identity_helpers() {
    let identity = DecodedIdentity {
        tier: Tier::Godfather,
        user_id: "user_ABC".to_string(),
        registration_date: None,
        personal_element: "AS".to_string(),
    };

    assert_eq!(identity.tier_name(), "GODFATHER");
    assert_eq!(identity.tier_level(), 3);
}
