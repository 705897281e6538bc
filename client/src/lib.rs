//! # reader-client
//!
//! Leptos + WASM frontend for the article reader: a static article styled by
//! user-selected typography and layout, and the side panel that edits it.
//!
//! The crate builds twice: with `ssr` for server rendering inside the
//! `article-reader` binary, and with `hydrate` as the browser bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser console log level: verbose in debug builds.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info }
}

/// WASM entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log_level());
    log::info!("hydrating article reader");
    leptos::mount::hydrate_body(app::App);
}
