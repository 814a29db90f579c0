//! # theme-toggle
//!
//! Leptos + WASM floating dark/light theme toggle for a web page.
//!
//! Loading the module mounts a single fixed-position button onto `<body>`,
//! keeps the body's `dark` marker class and inline background in sync with
//! the current theme, and persists the choice in `localStorage` under one key.
//!
//! A page can override the defaults with a JSON [`ToggleConfig`] in the
//! body's `data-theme-toggle` attribute.
//!
//! Browser glue (web-sys, console logging) is compiled only with the
//! `hydrate` feature. Without it the same state machine runs against
//! injected capabilities, which is how the tests exercise it.
//!
//! [`ToggleConfig`]: state::config::ToggleConfig

pub mod components;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// Module entry point: install logging, then mount the toggle onto `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    use components::theme_toggle::ThemeToggleButton;
    use leptos::prelude::*;
    use state::config::ToggleConfig;
    use util::page_body::DocumentBody;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = ToggleConfig::resolve(DocumentBody::config_attribute().as_deref());
    log::debug!("mounting theme toggle (key={})", config.storage_key);
    leptos::mount::mount_to_body(move || view! { <ThemeToggleButton config=config/> });
}
