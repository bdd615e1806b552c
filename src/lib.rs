//! # profilecard
//!
//! Leptos + WASM client for the profile card application.
//!
//! The crate owns the browser session (token + user id persisted to
//! `localStorage`), the login/register calls against the auth endpoint, and
//! the navigation guard that decides which routes a visitor may reach. Views
//! are thin shells around that core.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
