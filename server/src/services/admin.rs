//! Owner credentials from environment configuration.
//!
//! The site has a single account. Its email and the SHA-256 of its
//! password come from the environment; no password ever sits in config or
//! code in the clear.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::session::{Identity, bytes_to_hex};

/// Credentials and display identity for the site owner.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    email: String,
    password_sha256: String,
    identity: Identity,
}

impl AdminConfig {
    /// Build from `ADMIN_EMAIL`, `ADMIN_PASSWORD_SHA256`, and optional
    /// `ADMIN_NAME`. Returns `None` when either required variable is
    /// missing or blank — the server then runs with sign-in disabled.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let email = non_blank_env("ADMIN_EMAIL")?;
        let password_sha256 = non_blank_env("ADMIN_PASSWORD_SHA256")?.to_ascii_lowercase();
        let name = non_blank_env("ADMIN_NAME").unwrap_or_else(|| "Site owner".to_owned());
        Some(Self::from_parts(&email, &password_sha256, &name))
    }

    /// Build from explicit values; `password_sha256` is the lowercase hex
    /// SHA-256 of the password.
    #[must_use]
    pub fn from_parts(email: &str, password_sha256: &str, name: &str) -> Self {
        let email = email.trim().to_ascii_lowercase();
        Self {
            identity: Identity { id: Uuid::new_v4(), name: name.to_owned(), email: email.clone() },
            email,
            password_sha256: password_sha256.trim().to_ascii_lowercase(),
        }
    }

    /// Check a sign-in attempt. The password is hashed before comparison
    /// so both operands always have the same length, and email and
    /// password failures are indistinguishable to the caller.
    #[must_use]
    pub fn verify(&self, email: &str, password: &str) -> bool {
        let email_matches = email.trim().to_ascii_lowercase() == self.email;
        let password_matches = hash_password(password) == self.password_sha256;
        email_matches && password_matches
    }

    /// The identity issued to sessions created by a successful sign-in.
    #[must_use]
    pub fn identity(&self) -> Identity {
        self.identity.clone()
    }
}

/// Lowercase hex SHA-256 of a password.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
