//! Floating dark/light toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once per page onto `<body>`. The component owns the page's only
//! [`ThemeToggler`]; the toggler mutates the body directly, while the
//! button's own label and colors follow a signal mirroring the toggler's
//! presentation.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::state::config::ToggleConfig;
use crate::state::toggler::ThemeToggler;
use crate::util::page_body::{DocumentBody, PageBody};
use crate::util::presentation::Presentation;
use crate::util::storage::{BrowserStorage, PreferenceStore};

/// Click handler body: toggle, then hand back what the control should show.
fn activate<S: PreferenceStore, B: PageBody>(toggler: &mut ThemeToggler<S, B>) -> Presentation {
    toggler.on_activate();
    toggler.presentation()
}

/// Fixed-position theme toggle bound to `localStorage` and `document.body`.
#[component]
pub fn ThemeToggleButton(
    /// Storage key, default theme, and marker class.
    #[prop(optional)]
    config: Option<ToggleConfig>,
) -> impl IntoView {
    let toggler = ThemeToggler::initialize(config.unwrap_or_default(), BrowserStorage::new(), DocumentBody::new());
    let presentation = RwSignal::new(toggler.presentation());
    let toggler = StoredValue::new(toggler);

    let on_click = move |_| {
        toggler.update_value(|t| presentation.set(activate(t)));
    };

    view! {
        <button
            type="button"
            class="theme-toggle"
            title="Toggle theme"
            style=move || presentation.get().control_style()
            on:click=on_click
        >
            {move || presentation.get().label}
        </button>
    }
}
