//! Domain services behind the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `admin` verifies the owner's credentials from environment config,
//! `session` issues and validates the bearer tokens those credentials
//! unlock, and `contact` validates and delivers contact-form messages.

pub mod admin;
pub mod contact;
pub mod session;
