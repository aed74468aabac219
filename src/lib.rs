//! # eventra-client
//!
//! Leptos + WASM frontend for the Eventra event platform: creators
//! publish and manage events, attendees browse, register, and collect
//! receipts.
//!
//! This crate contains pages, components, application state, the REST
//! API client, and the token/session plumbing. It renders server-side
//! through the `ssr` feature and hydrates in the browser through
//! `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: set up panic reporting and logging, then
/// hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
