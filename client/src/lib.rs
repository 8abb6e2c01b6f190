//! # client
//!
//! Leptos + WASM front end for the Ana Marlowe portfolio site.
//!
//! This crate contains the routed pages, the route table and navigation
//! guard, application state, network types, and the HTTP client for the
//! auth and contact APIs. The `server` crate renders the same component
//! tree for SSR and serves the hydration bundle.

pub mod app;
pub mod components;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
