use super::*;

const PASSWORD: &str = "correct horse battery staple";

fn config() -> AdminConfig {
    AdminConfig::from_parts("Ana@Example.com", &hash_password(PASSWORD), "Ana Marlowe")
}

// =============================================================================
// verify
// =============================================================================

#[test]
fn verify_accepts_correct_credentials() {
    assert!(config().verify("ana@example.com", PASSWORD));
}

#[test]
fn verify_is_case_insensitive_on_email_only() {
    let config = config();
    assert!(config.verify("ANA@EXAMPLE.COM", PASSWORD));
    assert!(!config.verify("ana@example.com", "CORRECT HORSE BATTERY STAPLE"));
}

#[test]
fn verify_rejects_wrong_password() {
    assert!(!config().verify("ana@example.com", "wrong"));
}

#[test]
fn verify_rejects_unknown_email() {
    assert!(!config().verify("intruder@example.com", PASSWORD));
}

#[test]
fn identity_carries_configured_name_and_email() {
    let identity = config().identity();
    assert_eq!(identity.name, "Ana Marlowe");
    assert_eq!(identity.email, "ana@example.com");
}

#[test]
fn identity_is_stable_across_calls() {
    let config = config();
    assert_eq!(config.identity().id, config.identity().id);
}

// =============================================================================
// hash_password
// =============================================================================

#[test]
fn hash_password_is_lowercase_hex_sha256() {
    // SHA-256 of the empty string, a fixed vector.
    assert_eq!(
        hash_password(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

// =============================================================================
// from_env — env manipulation requires unsafe in edition 2024; unique var
// names are not possible here, so these tests tolerate parallel callers by
// setting and clearing around each assertion.
// =============================================================================

#[test]
fn from_env_missing_variables_disables_sign_in() {
    unsafe {
        std::env::remove_var("ADMIN_EMAIL");
        std::env::remove_var("ADMIN_PASSWORD_SHA256");
    }
    assert!(AdminConfig::from_env().is_none());
}
