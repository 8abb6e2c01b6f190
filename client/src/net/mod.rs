//! Networking modules for the site's HTTP APIs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls (auth and contact), `types` defines the
//! DTOs shared with the server.

pub mod api;
pub mod types;
