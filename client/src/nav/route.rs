//! Static route table for the site.
//!
//! DESIGN
//! ======
//! Descriptors carry path, name, and metadata only; the view bound to each
//! path lives in `app.rs` where the router macro needs it. The table is
//! constructed once and never mutated — the guard reads it, it never writes.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Metadata attached to a route. A closed struct rather than an open map so
/// the guard's branching stays exhaustive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Document title applied after a navigation that was not redirected.
    pub title: Option<&'static str>,
    /// Whether the guard must validate a credential before this route renders.
    pub requires_auth: bool,
}

impl RouteMeta {
    /// Metadata with a title and no auth requirement — the common case.
    #[must_use]
    pub const fn titled(title: &'static str) -> Self {
        Self { title: Some(title), requires_auth: false }
    }
}

/// One navigable path and its metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Absolute path as matched by the router (no trailing slash except `/`).
    pub path: &'static str,
    /// Stable route name, used for logging.
    pub name: &'static str,
    pub meta: RouteMeta,
}

/// Redirect target for denied navigation attempts.
pub const HOME_PATH: &str = "/";

const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: "/", name: "home", meta: RouteMeta::titled("Home") },
    RouteDescriptor { path: "/about", name: "about", meta: RouteMeta::titled("About") },
    RouteDescriptor { path: "/portfolio", name: "portfolio", meta: RouteMeta::titled("Portfolio") },
    RouteDescriptor { path: "/blog", name: "blog", meta: RouteMeta::titled("Blog") },
    RouteDescriptor { path: "/contact", name: "contact", meta: RouteMeta::titled("Contact") },
    RouteDescriptor { path: "/login", name: "login", meta: RouteMeta::titled("Sign in") },
    RouteDescriptor {
        path: "/admin",
        name: "admin",
        meta: RouteMeta { title: Some("Admin"), requires_auth: true },
    },
];

/// The ordered route table.
#[must_use]
pub fn routes() -> &'static [RouteDescriptor] {
    ROUTES
}

/// Look up a descriptor by exact path. Trailing slashes are normalized so
/// `/about/` resolves to `/about`.
#[must_use]
pub fn find_route(path: &str) -> Option<&'static RouteDescriptor> {
    let normalized = if path.len() > 1 { path.trim_end_matches('/') } else { path };
    ROUTES.iter().find(|r| r.path == normalized)
}
