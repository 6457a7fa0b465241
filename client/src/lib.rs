//! # client
//!
//! Leptos + WASM frontend for the LearnHub learning platform.
//!
//! The crate is built around a typed API client and a session layer: `net`
//! wraps the backend REST API, `state::auth` owns the token lifecycle, and
//! `util::auth` turns the session into route-guard redirects. Pages are thin
//! consumers of those layers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
