//! Contact page with a message form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::net::types::ContactMessage;

/// Form submission status shown under the submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SendStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Validate the contact form before any network call.
///
/// # Errors
///
/// Returns a short user-facing message naming the first missing field.
pub fn validate_contact_input(name: &str, email: &str, message: &str) -> Result<ContactMessage, &'static str> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if message.is_empty() {
        return Err("Enter a message.");
    }
    Ok(ContactMessage {
        name: name.to_owned(),
        email: email.to_owned(),
        message: message.to_owned(),
    })
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(SendStatus::Idle);

    let submit = move |_| {
        match validate_contact_input(&name.get(), &email.get(), &message.get()) {
            Err(reason) => status.set(SendStatus::Failed(reason.to_owned())),
            Ok(payload) => {
                status.set(SendStatus::Sending);
                leptos::task::spawn_local(async move {
                    match crate::net::api::send_contact_message(&payload).await {
                        Ok(()) => status.set(SendStatus::Sent),
                        Err(reason) => status.set(SendStatus::Failed(reason)),
                    }
                });
            }
        }
    };

    view! {
        <section class="contact-page">
            <h1>"Contact"</h1>
            <p>"Have a project in mind? Tell me about it."</p>
            <div class="contact-page__form">
                <label class="form__label">
                    "Name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
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
                    "Message"
                    <textarea
                        class="form__input form__input--area"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button
                    class="btn btn--primary"
                    disabled=move || status.get() == SendStatus::Sending
                    on:click=submit
                >
                    "Send"
                </button>
                {move || match status.get() {
                    SendStatus::Idle => ().into_any(),
                    SendStatus::Sending => view! { <p class="form__status">"Sending…"</p> }.into_any(),
                    SendStatus::Sent => view! { <p class="form__status">"Thanks — I'll get back to you soon."</p> }.into_any(),
                    SendStatus::Failed(reason) => view! { <p class="form__status form__status--error">{reason}</p> }.into_any(),
                }}
            </div>
        </section>
    }
}
