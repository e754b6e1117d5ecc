//! # lessongen-web
//!
//! Leptos + WASM single-page client for LessonGen, the lesson-authoring
//! product. Teachers create, version, differentiate, export and share lesson
//! plans against a REST backend and push them to Google Classroom.
//!
//! This crate contains pages, components, data hooks over a shared request
//! cache, network types, and route gating on the cookie session. Browser-only
//! code sits behind the `csr` feature; host builds keep the pure logic
//! testable with `cargo test`.

pub mod app;
pub mod components;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic and log hooks, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
