//! # client
//!
//! Leptos + WASM front-end for the Base11 companies interface.
//!
//! This crate contains pages, components, application state and the HTTP
//! adapter for the remote API. It is compiled twice: with `hydrate` into the
//! browser bundle, and with `ssr` into the host server, which renders the
//! same `App` to HTML.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
