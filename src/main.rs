//! Festival Booth Map
//!
//! Map dashboard for an outdoor music festival, built with Leptos (WASM).
//!
//! # Features
//!
//! - Booth locations and walking paths overlaid on a map
//! - Geotagged photo uploads with optional comments
//! - Timed gender/age-group visitor tallies
//! - Pre-computed visitor survey report with a heat-mapped mesh table
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Map rendering is delegated to the Google Maps JS SDK and
//! photo persistence to an external storage service; everything else is
//! per-view state on the browser event loop.

use leptos::*;

mod api;
mod app;
mod components;
mod data;
mod geo;
mod heatmap;
mod map;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
