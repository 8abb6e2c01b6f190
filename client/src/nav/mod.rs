//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `route` declares the static route table consumed by the router layer.
//! `guard` evaluates one navigation attempt at a time against injected
//! capabilities (credential storage, the identity endpoint, the document
//! title). `sentinel` is the Leptos component that runs the guard on every
//! location change and applies its outcome.

pub mod guard;
pub mod route;
pub mod sentinel;

pub use guard::{AuthRejected, CredentialStore, IdentityGateway, NavigationGuard, Outcome, TitleSink};
pub use route::{HOME_PATH, RouteDescriptor, RouteMeta, find_route, routes};
