//! Wire DTOs for the client/server boundary.
//!
//! These types mirror the server's response payloads so serde round-trips
//! stay lossless.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated principal as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
}

/// Request body for `/api/auth/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body from `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token.
    pub token: String,
    /// Token type to send back in the `Authorization` header (e.g. `"Bearer"`).
    pub token_type: String,
    pub identity: Identity,
}

/// Request body for `/api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
