//! CleverCards Web Frontend
//!
//! Leptos-based WASM landing page. Page logic lives in `cards-core`; this
//! crate binds it to the router, Stripe.js and the auth widget.

mod api;
mod app;
mod auth;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount::mount_to_body(App);
}
