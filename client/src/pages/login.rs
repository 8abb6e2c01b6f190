//! Sign-in page for the site owner.
//!
//! Successful sign-in writes the bearer credential to the store the guard
//! reads, then navigates to the admin view — which re-validates through
//! the guard like any other navigation.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Validate the sign-in form before calling the API.
///
/// # Errors
///
/// Returns a short user-facing message when a field is missing.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = Callback::new(move |(): ()| {
        match validate_login_input(&email.get(), &password.get()) {
            Err(reason) => error.set(Some(reason.to_owned())),
            Ok((email_value, password_value)) => {
                error.set(None);

                #[cfg(feature = "hydrate")]
                {
                    use crate::nav::guard::{CredentialStore, TOKEN_KEY, TOKEN_TYPE_KEY};
                    use crate::util::credentials::BrowserCredentials;

                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::api::login(&email_value, &password_value).await {
                            Ok(response) => {
                                let store = BrowserCredentials;
                                store.set(TOKEN_KEY, &response.token);
                                store.set(TOKEN_TYPE_KEY, &response.token_type);
                                auth.set(AuthState { identity: Some(response.identity) });
                                navigate("/admin", leptos_router::NavigateOptions::default());
                            }
                            Err(reason) => error.set(Some(reason)),
                        }
                    });
                }

                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (email_value, password_value, auth);
                }
            }
        }
    });

    view! {
        <section class="login-page">
            <h1>"Sign in"</h1>
            <div class="login-page__form">
                <label class="form__label">
                    "Email"
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <button class="btn btn--primary" on:click=move |_| submit.run(())>
                    "Sign in"
                </button>
                {move || {
                    error.get().map(|reason| {
                        view! { <p class="form__status form__status--error">{reason}</p> }
                    })
                }}
            </div>
        </section>
    }
}
