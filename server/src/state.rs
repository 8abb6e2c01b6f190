//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the session store plus the two optional capabilities: owner
//! credentials (sign-in disabled without them) and the contact mailer
//! (delivery unavailable without it).

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use time::Duration;

use crate::services::admin::AdminConfig;
use crate::services::contact::ContactMailer;
use crate::services::session::SessionStore;

/// Shared application state. Clone is required by Axum — inner fields are
/// Arc-wrapped or cheap.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    /// Owner credentials. `None` if the admin env vars are not configured.
    pub admin: Option<Arc<AdminConfig>>,
    /// Contact delivery. `None` if the mailer env vars are not configured.
    pub mailer: Option<ContactMailer>,
}

impl AppState {
    #[must_use]
    pub fn new(session_ttl: Duration, admin: Option<AdminConfig>, mailer: Option<ContactMailer>) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(session_ttl)),
            admin: admin.map(Arc::new),
            mailer,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::admin::hash_password;

    pub const TEST_PASSWORD: &str = "test-password";

    /// State with a configured owner account and no mailer.
    #[must_use]
    pub fn test_app_state() -> AppState {
        let admin = AdminConfig::from_parts("ana@example.com", &hash_password(TEST_PASSWORD), "Ana Marlowe");
        AppState::new(Duration::minutes(30), Some(admin), None)
    }

    /// State with sign-in disabled.
    #[must_use]
    pub fn unconfigured_app_state() -> AppState {
        AppState::new(Duration::minutes(30), None, None)
    }
}
