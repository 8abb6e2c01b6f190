//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <h1>"About"</h1>
            <p>
                "I've spent the last decade designing and shipping interfaces for "
                "studios and early-stage teams — first as a designer, then as the "
                "person who also builds the thing."
            </p>
            <p>
                "I care about typography, honest performance budgets, and software "
                "that stays understandable a year after it ships. When I'm not "
                "working I'm usually bouldering or repairing film cameras."
            </p>
        </section>
    }
}
