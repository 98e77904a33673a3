//! # client
//!
//! Leptos + WASM front-end for the movie watchlist.
//!
//! This crate contains pages, components, and reactive state. Watchlist
//! rules and persistence live in the `movies` crate; the only browser glue
//! here is the `localStorage` adapter and the clock.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).unwrap_or_default();
    leptos::mount::hydrate_body(app::App);
}
