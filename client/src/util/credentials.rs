//! Browser `localStorage` implementation of the credential store.
//!
//! Hydrate-only: SSR paths report no credential and ignore writes so server
//! rendering stays deterministic. Storage failures (private browsing,
//! disabled storage) degrade the same way instead of panicking.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::nav::guard::CredentialStore;

/// Credential store backed by `window.localStorage`.
#[derive(Clone, Copy, Default)]
pub struct BrowserCredentials;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for BrowserCredentials {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
