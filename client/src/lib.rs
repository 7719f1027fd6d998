//! # client
//!
//! Leptos + WASM front-end glue for the portfolio preference engine.
//! The engine itself lives in the `prefs` crate; this crate supplies
//! the browser-backed channels (localStorage, the preference cookie,
//! the cross-tab `storage` event, the sync endpoint), the reactive
//! context components read from, and the root shell that binds the
//! resolved preferences onto `<html>` for a flash-free first paint.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod themes;
pub mod util;

/// Client entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Preference-sync failures are logged in development builds only.
    if cfg!(debug_assertions) {
        let _ = console_log::init_with_level(log::Level::Debug);
    }
    leptos::mount::hydrate_body(crate::app::App);
}
