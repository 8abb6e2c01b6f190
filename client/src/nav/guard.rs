//! Navigation guard: gate access to protected routes, maintain the title.
//!
//! ARCHITECTURE
//! ============
//! The guard runs once per navigation attempt, before the target view is
//! shown. It owns no globals: credential storage, the identity endpoint,
//! and the document title are injected as capabilities so tests substitute
//! in-memory fakes and the browser wires real implementations.
//!
//! ERROR HANDLING
//! ==============
//! Every identity-endpoint failure (network outage, expired token, server
//! error) collapses into `AuthRejected`. The guard logs the reason, clears
//! the stored credential, and redirects; nothing propagates to the caller.
//!
//! TRADE-OFFS
//! ==========
//! A rejected credential is cleared unconditionally, so a transient network
//! blip signs the admin out. Distinguishing transient from definitive
//! failure would only touch this module's interior; `AuthRejected` stays
//! the single boundary error either way.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::cell::Cell;
use std::fmt;

use crate::nav::route::{HOME_PATH, RouteDescriptor};
use crate::net::types::Identity;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "marlowe_token";
/// Storage key for the token type (e.g. `"Bearer"`).
pub const TOKEN_TYPE_KEY: &str = "marlowe_token_type";
/// Token type assumed when the stored type is missing.
pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Durable key-value storage surviving page reloads.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The identity endpoint's failure, collapsed to one kind. The reason is
/// diagnostic-only and never drives control flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthRejected {
    reason: String,
}

impl AuthRejected {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl fmt::Display for AuthRejected {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "auth rejected: {}", self.reason)
    }
}

impl std::error::Error for AuthRejected {}

/// Remote endpoint validating a bearer credential.
pub trait IdentityGateway {
    /// Resolve the identity behind `token`, or fail for any reason.
    fn current_identity(
        &self,
        token_type: &str,
        token: &str,
    ) -> impl Future<Output = Result<Identity, AuthRejected>>;
}

/// Mutable document title.
pub trait TitleSink {
    fn set_title(&self, title: &str);
}

/// Terminal result of one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Navigation proceeds. Carries the validated identity when the route
    /// required auth.
    Allowed { identity: Option<Identity> },
    /// Navigation is redirected instead of completing.
    Redirected { target: &'static str },
    /// A newer attempt started while this one was validating; no side
    /// effects were applied and the resolution must be dropped.
    Superseded,
}

/// Per-navigation authentication and title gate.
///
/// Attempts are independent and stateless apart from the shared credential
/// store; the attempt counter exists only to discard stale resolutions.
pub struct NavigationGuard<S, G, T> {
    store: S,
    gateway: G,
    titles: T,
    attempts: Cell<u64>,
}

impl<S, G, T> NavigationGuard<S, G, T>
where
    S: CredentialStore,
    G: IdentityGateway,
    T: TitleSink,
{
    pub fn new(store: S, gateway: G, titles: T) -> Self {
        Self { store, gateway, titles, attempts: Cell::new(0) }
    }

    /// Evaluate one attempted transition to `target`.
    ///
    /// Unguarded routes skip authorization entirely. Guarded routes deny
    /// with a redirect to home when no token is stored, or when the
    /// identity endpoint rejects the stored token — the latter also removes
    /// both credential keys. The title is written only for attempts that
    /// were not redirected.
    pub async fn resolve(&self, target: &RouteDescriptor) -> Outcome {
        let attempt = self.attempts.get().wrapping_add(1);
        self.attempts.set(attempt);

        if target.meta.requires_auth {
            let Some(token) = self.store.get(TOKEN_KEY) else {
                log::info!("denied {}: no stored credential", target.name);
                return Outcome::Redirected { target: HOME_PATH };
            };
            let token_type = self
                .store
                .get(TOKEN_TYPE_KEY)
                .unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_owned());

            match self.gateway.current_identity(&token_type, &token).await {
                Ok(identity) => {
                    if self.attempts.get() != attempt {
                        return Outcome::Superseded;
                    }
                    self.apply_title(target);
                    return Outcome::Allowed { identity: Some(identity) };
                }
                Err(rejection) => {
                    if self.attempts.get() != attempt {
                        return Outcome::Superseded;
                    }
                    log::warn!("denied {}: {rejection}", target.name);
                    self.store.remove(TOKEN_KEY);
                    self.store.remove(TOKEN_TYPE_KEY);
                    return Outcome::Redirected { target: HOME_PATH };
                }
            }
        }

        self.apply_title(target);
        Outcome::Allowed { identity: None }
    }

    fn apply_title(&self, target: &RouteDescriptor) {
        if let Some(title) = target.meta.title {
            self.titles.set_title(title);
        }
    }
}
