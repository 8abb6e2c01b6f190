//! Contact-form validation and email delivery.
//!
//! Messages are validated before any delivery attempt and forwarded to the
//! site owner's inbox through Resend.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

const MAX_MESSAGE_CHARS: usize = 4_000;
const MAX_NAME_CHARS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("invalid name")]
    InvalidName,
    #[error("invalid email")]
    InvalidEmail,
    #[error("empty message")]
    EmptyMessage,
    #[error("message too long")]
    MessageTooLong,
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// An inbound contact-form message, already validated.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Normalize and validate a sender email.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Validate raw form input into a deliverable message.
///
/// # Errors
///
/// Returns the first `ContactError` the input violates.
pub fn validate_message(name: &str, email: &str, message: &str) -> Result<ContactMessage, ContactError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
        return Err(ContactError::InvalidName);
    }
    let email = normalize_email(email).ok_or(ContactError::InvalidEmail)?;
    let message = message.trim();
    if message.is_empty() {
        return Err(ContactError::EmptyMessage);
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ContactError::MessageTooLong);
    }
    Ok(ContactMessage { name: name.to_owned(), email, message: message.to_owned() })
}

#[must_use]
pub fn render_subject(message: &ContactMessage) -> String {
    format!("New contact message from {}", message.name)
}

#[must_use]
pub fn render_body(message: &ContactMessage) -> String {
    format!(
        "From: {} <{}>\n\n{}\n",
        message.name, message.email, message.message
    )
}

/// Resend-backed delivery to the owner's inbox.
#[derive(Clone)]
pub struct ContactMailer {
    api_key: String,
    from: String,
    to: String,
}

impl ContactMailer {
    /// Build from `RESEND_API_KEY`, `CONTACT_FROM`, and `CONTACT_TO`.
    /// Returns `None` when any variable is missing — the contact endpoint
    /// then reports delivery as unavailable.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("RESEND_API_KEY").ok().filter(|v| !v.trim().is_empty())?;
        let from = std::env::var("CONTACT_FROM").ok().filter(|v| !v.trim().is_empty())?;
        let to = std::env::var("CONTACT_TO").ok().filter(|v| !v.trim().is_empty())?;
        Some(Self { api_key, from, to })
    }

    /// Deliver a validated message.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Delivery` when the provider rejects the send.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let resend = Resend::new(&self.api_key);
        let to = [self.to.as_str()];
        let subject = render_subject(message);
        let email = CreateEmailBaseOptions::new(&self.from, to, &subject)
            .with_text(&render_body(message));
        resend
            .emails
            .send(email)
            .await
            .map_err(|e| ContactError::Delivery(e.to_string()))?;
        Ok(())
    }
}
