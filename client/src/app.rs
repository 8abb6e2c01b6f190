//! Root application component with routing, guard, and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::nav::sentinel::RouteSentinel;
use crate::pages::{
    about::AboutPage, admin::AdminPage, blog::BlogPage, contact::ContactPage, home::HomePage,
    login::LoginPage, portfolio::PortfolioPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state, mounts the navigation guard sentinel inside the
/// router, and binds each route-table path to its page view. The paths
/// here must stay in step with `nav::route::routes()` — the route-table
/// tests keep the table itself honest.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/marlowe-site.css"/>
        <Title text="Ana Marlowe"/>

        <Router>
            <RouteSentinel/>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("portfolio") view=PortfolioPage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </main>
        </Router>
    }
}
