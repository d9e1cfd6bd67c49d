//! # chat-widget
//!
//! Leptos + WASM chat widget for the store assistant. Captures user text,
//! attaches a best-effort device location, posts it to the backend chat
//! endpoint and renders the exchange as a scrolling transcript.
//!
//! The interaction logic lives in [`controller::ChatWidgetController`] and
//! talks to the outside world only through the traits in [`net`] and
//! [`surface`], so every pipeline runs natively under test. Browser adapters
//! and the `mount` entry points are compiled with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod net;
pub mod state;
pub mod surface;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Mount the widget into `<body>` with the default configuration.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount() {
    app::install_hooks();
    app::mount(config::WidgetConfig::default());
}

/// Mount the widget with a JSON configuration supplied by the host page.
///
/// A malformed document is logged and the defaults are used instead.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount_with_config(json: &str) {
    app::install_hooks();
    let config = match config::WidgetConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("widget config rejected, using defaults: {e}");
            config::WidgetConfig::default()
        }
    };
    app::mount(config);
}
