//! # picboard-ui
//!
//! Leptos + WASM frontend for the PicBoard corporate analytics dashboard.
//! Replaces the React `Frontend/` with a Rust-native UI layer.
//!
//! The load-bearing subsystem is [`auth`]: credential persistence, the
//! session state machine, and route authorization. Charts, tables, and all
//! KPI numbers are computed by the remote API; the pages in this crate only
//! present them.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// Browser entry point: mount the app over the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
