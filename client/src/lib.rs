//! # client
//!
//! Leptos + WASM frontend for the code review platform.
//!
//! The reviewer page (`/`) hands out unreviewed snippets and collects
//! line-by-line feedback; the admin dashboard (`/admin`) manages the snippet
//! inventory. Validation rules and wire types come from the `reviews` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
