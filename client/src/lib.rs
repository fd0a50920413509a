//! # client
//!
//! Leptos + WASM admin console for the Tout's Routes ride-booking platform.
//!
//! This crate contains the routed shell, list/detail pages for captains,
//! riders, bookings and financials, the dashboard, session persistence and
//! the bearer-authenticated API client. Wire types come from `wire`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered console.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
