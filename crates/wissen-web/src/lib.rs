//! # Wissen Web
//!
//! WebAssembly entry point for the Wissen dashboard and landing pages.
//!
//! ## Architecture
//!
//! The state machines live in `wissen-core`. This crate implements their
//! ports over `web-sys` and binds browser events to them once the document
//! has been parsed. Pages opt into features through markup: a page without
//! sidebar toggles gets no dashboard shell, a page without `.navbar` gets no
//! scroll listener, and so on.
//!
//! ## Modules
//!
//! - [`dashboard`] - Sidebar shell and page router bindings
//! - [`landing`] - Accordion, navbar, reveal and mobile menu bindings
//! - [`sidebar`], [`pages`] - DOM views for the state machines
//! - [`storage`], [`media`] - Local storage and `matchMedia` ports
//! - [`logging`] - Console logging setup

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use wissen_core::UiConfig;

pub mod dashboard;
pub mod dom;
pub mod icons;
pub mod landing;
pub mod logging;
pub mod media;
pub mod pages;
pub mod sidebar;
pub mod storage;

/// Body attribute carrying the JSON configuration.
pub const CONFIG_ATTRIBUTE: &str = "data-ui-config";

/// Module entry point, run by the wasm-bindgen glue on load.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let ready = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| boot(&ready)).forget();
    } else {
        boot(&document);
    }
}

fn boot(document: &Document) {
    let raw = document
        .body()
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    let (config, config_error) = match UiConfig::from_attribute(raw.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (UiConfig::default(), Some(e)),
    };

    logging::init_logging(&config.log_level);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Failed to parse UI config, using defaults");
    }

    dashboard::mount(document, &config);
    landing::mount(document, &config);
}
