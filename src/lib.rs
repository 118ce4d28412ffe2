//! Qsheet: assignment cover sheets with a self-reported AI-usage radar chart.
//!
//! The student fills in the fields a template asks for, ticks whether they
//! used generative AI and, if so, drags the radar chart's axes to show how
//! much and answers a few reflection questions. Export produces a Word-readable
//! `.doc` with the chart embedded as an image.
//!
//! The chart lives in the `radar` workspace crate. This crate holds the
//! template, form and document logic (all headless and unit-tested) plus the
//! Leptos UI in [`app`], which only does real work with the `csr` feature.

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod form;
pub mod session;
pub mod template;

/// WASM entry point: install console logging and mount the UI.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Already installed if the module is initialised twice.
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::debug!("qsheet: console logging ready");
    }
    leptos::mount::mount_to_body(app::App);
}
