//! Auth routes — sign-in, current identity, sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client's navigation guard calls `GET /api/auth/me` with the stored
//! bearer credential on every guarded navigation; these handlers are the
//! Auth Service side of that contract.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::{FromRef, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::services::session::Identity;
use crate::state::AppState;

/// Token type issued with every session.
pub const TOKEN_TYPE: &str = "Bearer";

/// Parse an `Authorization` header value into `(token_type, token)`.
#[must_use]
pub fn parse_authorization(value: &str) -> Option<(&str, &str)> {
    let mut parts = value.trim().splitn(2, ' ');
    let token_type = parts.next().filter(|t| !t.is_empty())?;
    let token = parts.next().map(str::trim).filter(|t| !t.is_empty())?;
    Some((token_type, token))
}

/// Extract the bearer token from request headers. The token type is not
/// case-sensitive per RFC 6750.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (token_type, token) = parse_authorization(raw)?;
    token_type.eq_ignore_ascii_case(TOKEN_TYPE).then_some(token)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated owner extracted from the bearer token.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub identity: Identity,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(StatusCode::UNAUTHORIZED)?;
        let app_state = AppState::from_ref(state);
        let identity = app_state
            .sessions
            .authenticate(token)
            .ok_or(StatusCode::UNAUTHORIZED)?;
        Ok(Self { identity })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    pub identity: Identity,
}

/// `POST /api/auth/login` — verify owner credentials and issue a session.
/// Unknown email and wrong password produce the same response.
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> Response {
    let Some(admin) = &state.admin else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Sign-in is not configured").into_response();
    };

    if !admin.verify(&request.email, &request.password) {
        tracing::info!("rejected sign-in attempt");
        return (StatusCode::UNAUTHORIZED, "invalid credentials").into_response();
    }

    let identity = admin.identity();
    let token = state.sessions.issue(identity.clone());
    tracing::info!(email = %identity.email, "owner signed in");
    Json(LoginResponse { token, token_type: TOKEN_TYPE, identity }).into_response()
}

/// `GET /api/auth/me` — return the identity behind the bearer token.
pub async fn me(user: AuthUser) -> Json<Identity> {
    Json(user.identity)
}

/// `POST /api/auth/logout` — revoke the presented session. Succeeds even
/// if the token was already invalid; there is nothing useful to leak.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.revoke(token);
    }
    StatusCode::NO_CONTENT
}
