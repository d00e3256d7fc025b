//! # taskdeck-client
//!
//! Leptos + WASM frontend for Taskdeck, a small project and task manager.
//!
//! This crate contains pages, components, client-side stores, and the REST
//! client. The server crate renders it with SSR (`ssr` feature) and the
//! browser hydrates it (`hydrate` feature).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
