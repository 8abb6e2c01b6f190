use super::*;

#[test]
fn identity_deserializes_from_server_payload() {
    let json = r#"{"id":"9b2f1c4d-0000-0000-0000-000000000000","name":"Ana Marlowe","email":"ana@example.com"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();
    assert_eq!(identity.name, "Ana Marlowe");
    assert_eq!(identity.email, "ana@example.com");
}

#[test]
fn login_response_round_trips() {
    let response = LoginResponse {
        token: "deadbeef".to_owned(),
        token_type: "Bearer".to_owned(),
        identity: Identity {
            id: "u1".to_owned(),
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
        },
    };
    let json = serde_json::to_string(&response).unwrap();
    let restored: LoginResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, response);
}

#[test]
fn identity_rejects_missing_fields() {
    let json = r#"{"id":"u1","name":"Ana"}"#;
    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn contact_message_serializes_expected_keys() {
    let message = ContactMessage {
        name: "Visitor".to_owned(),
        email: "visitor@example.com".to_owned(),
        message: "Hello".to_owned(),
    };
    let value = serde_json::to_value(&message).unwrap();
    assert_eq!(value["name"], "Visitor");
    assert_eq!(value["email"], "visitor@example.com");
    assert_eq!(value["message"], "Hello");
}
