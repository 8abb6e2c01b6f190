//! Bearer-token session management.
//!
//! ARCHITECTURE
//! ============
//! Sessions live in memory: this site has exactly one account (the owner),
//! so a process-local map bounded by the TTL is the whole store. Restarting
//! the server signs the owner out, which the client guard handles the same
//! way as an expired token.
//!
//! TRADE-OFFS
//! ==========
//! Only the SHA-256 of each token is retained, so a leaked process dump
//! cannot replay live sessions; the cost is that tokens are irrecoverable
//! by design.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Mutex;

use rand::Rng;
use sha2::{Digest, Sha256};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// The identity a validated session resolves to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Identity {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
}

struct Session {
    identity: Identity,
    expires_at: OffsetDateTime,
}

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// SHA-256 of a raw token, hex-encoded. Only this form is ever stored.
#[must_use]
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// In-memory session store keyed by token hash.
pub struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, sessions: Mutex::new(HashMap::new()) }
    }

    /// Issue a session for `identity` and return the raw token.
    pub fn issue(&self, identity: Identity) -> String {
        let token = generate_token();
        let session = Session { identity, expires_at: OffsetDateTime::now_utc() + self.ttl };
        self.sessions
            .lock()
            .expect("session lock poisoned")
            .insert(hash_token(&token), session);
        token
    }

    /// Resolve a raw token to its identity. Expired entries are removed on
    /// the way out.
    pub fn authenticate(&self, token: &str) -> Option<Identity> {
        let key = hash_token(token);
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        match sessions.get(&key) {
            Some(session) if session.expires_at > OffsetDateTime::now_utc() => {
                Some(session.identity.clone())
            }
            Some(_) => {
                sessions.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Revoke a session. Revoking an unknown or already-revoked token is a
    /// no-op.
    pub fn revoke(&self, token: &str) {
        self.sessions
            .lock()
            .expect("session lock poisoned")
            .remove(&hash_token(token));
    }

    /// Drop every expired session, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = OffsetDateTime::now_utc();
        let mut sessions = self.sessions.lock().expect("session lock poisoned");
        let before = sessions.len();
        sessions.retain(|_, session| session.expires_at > now);
        before - sessions.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.lock().expect("session lock poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
