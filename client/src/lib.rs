//! # client
//!
//! Leptos front-end for the teller desk: home, login, dashboard and the
//! customer-details hand-off. Rendered on the server (`ssr`) and hydrated
//! in the browser (`hydrate`).

pub mod app;
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
