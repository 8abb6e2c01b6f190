use super::*;

#[test]
fn validate_login_trims_email_and_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("  ana@example.com  ", " secret "),
        Ok(("ana@example.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("ana@example.com", ""), Err("Enter both email and password."));
    assert_eq!(validate_login_input("   ", ""), Err("Enter both email and password."));
}
