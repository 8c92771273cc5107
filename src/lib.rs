//! # admin-client
//!
//! Leptos + WASM admin frontend for the project-management REST API.
//!
//! This crate contains the route table, pages, the shared `AdminStore` state
//! container, and the REST client used to list, create, edit, and delete
//! projects. Browser-only pieces (HTTP transport, `window.location`, mounting)
//! sit behind the `csr` feature so the rest is testable natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: installs logging and mounts the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("admin-client: mounting");
    leptos::mount::mount_to_body(|| {
        use app::App;
        use leptos::prelude::*;
        view! { <App/> }
    });
}
