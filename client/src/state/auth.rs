//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard writes this state after each guarded navigation;
//! identity-aware components (the admin view, the header) read it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Identity;

/// Authentication state tracking the validated identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Identity confirmed by the most recent guarded navigation, if any.
    pub identity: Option<Identity>,
}

impl AuthState {
    #[must_use]
    pub fn signed_in(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.name.as_str())
    }
}
