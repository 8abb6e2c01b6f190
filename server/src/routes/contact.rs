//! Contact route — validate and deliver contact-form messages.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::services::contact::{ContactError, validate_message};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Map validation failures to a 400 with a short reason; delivery failures
/// stay internal.
fn rejection_status(error: &ContactError) -> StatusCode {
    match error {
        ContactError::InvalidName
        | ContactError::InvalidEmail
        | ContactError::EmptyMessage
        | ContactError::MessageTooLong => StatusCode::BAD_REQUEST,
        ContactError::Delivery(_) => StatusCode::BAD_GATEWAY,
    }
}

/// `POST /api/contact` — validate the payload and hand it to the mailer.
pub async fn submit(State(state): State<AppState>, Json(request): Json<ContactRequest>) -> Response {
    let message = match validate_message(&request.name, &request.email, &request.message) {
        Ok(message) => message,
        Err(error) => {
            return (rejection_status(&error), error.to_string()).into_response();
        }
    };

    let Some(mailer) = &state.mailer else {
        tracing::warn!("contact message dropped: mailer not configured");
        return (StatusCode::SERVICE_UNAVAILABLE, "Contact delivery is not configured").into_response();
    };

    match mailer.send(&message).await {
        Ok(()) => {
            tracing::info!(from = %message.email, "contact message delivered");
            StatusCode::ACCEPTED.into_response()
        }
        Err(error) => {
            tracing::error!(error = %error, "contact delivery failed");
            (rejection_status(&error), "Delivery failed").into_response()
        }
    }
}
