use super::*;

#[test]
fn validate_trims_and_accepts_complete_input() {
    let message = validate_contact_input("  Ana  ", " ana@example.com ", " Hello there ").unwrap();
    assert_eq!(message.name, "Ana");
    assert_eq!(message.email, "ana@example.com");
    assert_eq!(message.message, "Hello there");
}

#[test]
fn validate_requires_name() {
    assert_eq!(validate_contact_input("   ", "a@b.com", "hi"), Err("Enter your name."));
}

#[test]
fn validate_requires_plausible_email() {
    assert_eq!(validate_contact_input("Ana", "", "hi"), Err("Enter a valid email address."));
    assert_eq!(validate_contact_input("Ana", "not-an-email", "hi"), Err("Enter a valid email address."));
}

#[test]
fn validate_requires_message() {
    assert_eq!(validate_contact_input("Ana", "a@b.com", "   "), Err("Enter a message."));
}
