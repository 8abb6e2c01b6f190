use super::*;

fn valid() -> ContactMessage {
    validate_message("Visitor", "visitor@example.com", "I have a project for you.").unwrap()
}

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_lowercases_and_trims() {
    assert_eq!(normalize_email("  Visitor@Example.COM  "), Some("visitor@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_malformed_addresses() {
    for bad in ["", "   ", "no-at-sign", "@host", "user@", "a@b@c"] {
        assert_eq!(normalize_email(bad), None, "{bad:?} should be rejected");
    }
}

// =============================================================================
// validate_message
// =============================================================================

#[test]
fn validate_accepts_and_normalizes_complete_input() {
    let message = valid();
    assert_eq!(message.name, "Visitor");
    assert_eq!(message.email, "visitor@example.com");
}

#[test]
fn validate_rejects_blank_name() {
    assert!(matches!(
        validate_message("  ", "a@b.com", "hi"),
        Err(ContactError::InvalidName)
    ));
}

#[test]
fn validate_rejects_oversized_name() {
    let name = "x".repeat(201);
    assert!(matches!(
        validate_message(&name, "a@b.com", "hi"),
        Err(ContactError::InvalidName)
    ));
}

#[test]
fn validate_rejects_bad_email() {
    assert!(matches!(
        validate_message("Visitor", "nope", "hi"),
        Err(ContactError::InvalidEmail)
    ));
}

#[test]
fn validate_rejects_empty_message() {
    assert!(matches!(
        validate_message("Visitor", "a@b.com", "   "),
        Err(ContactError::EmptyMessage)
    ));
}

#[test]
fn validate_rejects_oversized_message() {
    let message = "x".repeat(4_001);
    assert!(matches!(
        validate_message("Visitor", "a@b.com", &message),
        Err(ContactError::MessageTooLong)
    ));
}

// =============================================================================
// rendering
// =============================================================================

#[test]
fn subject_names_the_sender() {
    assert_eq!(render_subject(&valid()), "New contact message from Visitor");
}

#[test]
fn body_includes_sender_and_message() {
    let body = render_body(&valid());
    assert!(body.contains("Visitor <visitor@example.com>"));
    assert!(body.contains("I have a project for you."));
}
