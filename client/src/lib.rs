//! # client
//!
//! Leptos + WASM frontend for the login / signup form.
//!
//! This crate contains the form state machine, validation rules, the HTTP
//! submission helper, and the pages routed by [`app::App`]. The `server`
//! crate renders it with SSR; the `hydrate` feature builds the browser side.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
