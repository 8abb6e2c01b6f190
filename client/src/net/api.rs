//! REST API helpers for the auth and contact endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors/`None` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The identity call collapses every failure into `AuthRejected` for the
//! guard; the login and contact calls surface short user-facing strings.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactMessage, Identity, LoginRequest, LoginResponse};
use crate::nav::guard::{AuthRejected, IdentityGateway};

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const AUTH_ME_ENDPOINT: &str = "/api/auth/me";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const AUTH_LOGIN_ENDPOINT: &str = "/api/auth/login";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const AUTH_LOGOUT_ENDPOINT: &str = "/api/auth/logout";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const CONTACT_ENDPOINT: &str = "/api/contact";

/// `Authorization` header value for a stored credential.
#[must_use]
pub fn authorization_header(token_type: &str, token: &str) -> String {
    format!("{token_type} {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    if status == 401 {
        "Wrong email or password.".to_owned()
    } else {
        format!("Sign-in failed ({status}).")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16) -> String {
    format!("Could not send your message ({status}).")
}

/// Identity gateway backed by `GET /api/auth/me`.
#[derive(Clone, Copy, Default)]
pub struct HttpIdentityGateway;

impl IdentityGateway for HttpIdentityGateway {
    async fn current_identity(&self, token_type: &str, token: &str) -> Result<Identity, AuthRejected> {
        #[cfg(feature = "hydrate")]
        {
            let response = gloo_net::http::Request::get(AUTH_ME_ENDPOINT)
                .header("Authorization", &authorization_header(token_type, token))
                .send()
                .await
                .map_err(|e| AuthRejected::new(format!("network error: {e}")))?;
            if !response.ok() {
                return Err(AuthRejected::new(format!("status {}", response.status())));
            }
            response
                .json::<Identity>()
                .await
                .map_err(|e| AuthRejected::new(format!("malformed identity: {e}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token_type, token);
            Err(AuthRejected::new("not available on server"))
        }
    }
}

/// Sign in with the admin credentials via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a short user-facing message when the request fails or the
/// server rejects the credentials.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let response = gloo_net::http::Request::post(AUTH_LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.ok() {
            return Err(login_failed_message(response.status()));
        }
        response.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Revoke the current session via `POST /api/auth/logout`. Best effort —
/// the local credential is cleared regardless.
pub async fn logout(token_type: &str, token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(AUTH_LOGOUT_ENDPOINT)
            .header("Authorization", &authorization_header(token_type, token))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token_type, token);
    }
}

/// Deliver a contact-form message via `POST /api/contact`.
///
/// # Errors
///
/// Returns a short user-facing message when the request fails or the
/// server rejects the payload.
pub async fn send_contact_message(message: &ContactMessage) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(message)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.ok() {
            return Err(contact_failed_message(response.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err("not available on server".to_owned())
    }
}
