//! Splitter Web App
//!
//! Shared expense tracking in the browser, built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and registration
//! - Expense and person management
//! - Balance summary computed by the backend
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. The `splitter` core
//! provides services, session handling and the route guard; this crate
//! supplies the browser pieces: `localStorage` for the session and `fetch`
//! for HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Route Rust panics to the browser console
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
