//! Admin page — only reachable through the navigation guard.
//!
//! The guard redirects unauthenticated attempts before this view matters,
//! but content is additionally gated on auth state so nothing sensitive
//! flashes while a guarded navigation is still validating.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let sign_out = Callback::new(move |(): ()| {
        #[cfg(feature = "hydrate")]
        {
            use crate::nav::guard::{CredentialStore, DEFAULT_TOKEN_TYPE, TOKEN_KEY, TOKEN_TYPE_KEY};
            use crate::util::credentials::BrowserCredentials;

            let store = BrowserCredentials;
            let token = store.get(TOKEN_KEY);
            let token_type = store.get(TOKEN_TYPE_KEY).unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_owned());
            store.remove(TOKEN_KEY);
            store.remove(TOKEN_TYPE_KEY);
            auth.set(AuthState::default());

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Some(token) = token {
                    crate::net::api::logout(&token_type, &token).await;
                }
                navigate("/", leptos_router::NavigateOptions::default());
            });
        }
    });

    view! {
        <section class="admin-page">
            <Show
                when=move || auth.get().signed_in()
                fallback=|| view! { <p class="admin-page__checking">"Checking session…"</p> }
            >
                <header class="admin-page__header">
                    <h1>"Admin"</h1>
                    <button class="btn" on:click=move |_| sign_out.run(())>
                        "Sign out"
                    </button>
                </header>
                <p class="admin-page__identity">
                    "Signed in as "
                    {move || auth.get().display_name().unwrap_or("unknown").to_owned()}
                </p>
                <p class="admin-page__note">
                    "Site management tools live here. Drafts, message review, and "
                    "publishing are on the roadmap."
                </p>
            </Show>
        </section>
    }
}
