//! Site-wide navigation header.

use leptos::prelude::*;

use crate::nav::route::routes;

/// Top navigation bar. Links are generated from the route table so the
/// header can never drift from the router; the sign-in and admin routes
/// are deliberately left out of the public navigation. The router
/// intercepts same-origin anchor clicks, so plain `<a>` tags stay
/// client-side navigations.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let links: Vec<_> = routes()
        .iter()
        .filter(|r| !r.meta.requires_auth && r.name != "login")
        .map(|r| {
            view! {
                <a href=r.path class="site-header__link">
                    {r.meta.title.unwrap_or(r.name)}
                </a>
            }
        })
        .collect();

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"Ana Marlowe"</a>
            <nav class="site-header__nav">{links}</nav>
        </header>
    }
}
