//! Leakwatch admin client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser front-end for the leak-prediction backend: uploads a CSV to
//! `/predict`, renders the returned rows, and sends canned leak reports to
//! `/report_leak`. All browser-only code is gated behind the `hydrate`
//! feature so the crate also compiles natively for unit tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point; called by the host page after the module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
