//! # voluntree
//!
//! Leptos + WASM client for a volunteer platform: account management for
//! volunteers and organizations, nearby-event discovery, event creation
//! with address geocoding, and organization notifications. The client is a
//! presentation layer over external HTTP services; it renders state and
//! issues requests.
//!
//! Two build targets share this crate: the `hydrate` feature produces the
//! browser bundle, and the `ssr` feature produces the axum host that serves
//! the shell and static assets. The backend API itself is a separate
//! service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
