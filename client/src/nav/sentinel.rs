//! Leptos integration for the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RouteSentinel` sits inside the router, watches the current location,
//! and runs one guard evaluation per navigation attempt. Redirects go
//! through the router's `navigate`; validated identities land in the
//! shared auth state. SSR renders nothing — the guard is a browser
//! concern and protected content is gated on auth state besides.

use leptos::prelude::*;

/// Runs the navigation guard on every location change.
#[component]
pub fn RouteSentinel() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    install_guard();
}

#[cfg(feature = "hydrate")]
fn install_guard() {
    use std::rc::Rc;

    use leptos::task::spawn_local;
    use leptos_router::NavigateOptions;
    use leptos_router::hooks::{use_location, use_navigate};

    use crate::nav::guard::{NavigationGuard, Outcome};
    use crate::nav::route::find_route;
    use crate::net::api::HttpIdentityGateway;
    use crate::state::auth::AuthState;
    use crate::util::credentials::BrowserCredentials;
    use crate::util::title::BrowserTitle;

    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();
    let guard = Rc::new(NavigationGuard::new(BrowserCredentials, HttpIdentityGateway, BrowserTitle));

    Effect::new(move || {
        let path = location.pathname.get();
        let Some(descriptor) = find_route(&path) else {
            // Unknown paths fall through to the router's not-found view.
            return;
        };

        let guard = Rc::clone(&guard);
        let navigate = navigate.clone();
        spawn_local(async move {
            match guard.resolve(descriptor).await {
                Outcome::Allowed { identity } => {
                    if descriptor.meta.requires_auth {
                        auth.set(AuthState { identity });
                    }
                }
                Outcome::Redirected { target } => {
                    if descriptor.meta.requires_auth {
                        auth.set(AuthState::default());
                    }
                    navigate(target, NavigateOptions::default());
                }
                Outcome::Superseded => {}
            }
        });
    });
}
