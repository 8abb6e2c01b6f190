//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1 class="home-page__headline">"Ana Marlowe"</h1>
            <p class="home-page__tagline">
                "Product designer and front-end developer. I build small, fast, "
                "deliberate interfaces for people who care about the details."
            </p>
            <div class="home-page__actions">
                <a href="/portfolio" class="btn btn--primary">"See my work"</a>
                <a href="/contact" class="btn">"Get in touch"</a>
            </div>
        </section>
    }
}
