//! SG Dashboard
//!
//! City dashboard for Singapore built with Leptos (WASM).
//!
//! # Features
//!
//! - Chat assistant backed by the dashboard service
//! - Dengue cluster and rainfall station maps
//! - Stored chat history
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every view talks to the dashboard service over plain HTTP;
//! the service itself lives outside this repository.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod error;
mod geo;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Logger already initialised: {}", e).into());
    }

    log::info!("Starting dashboard against {}", config::get_api_base());

    mount_to_body(|| view! { <app::App /> });
}
