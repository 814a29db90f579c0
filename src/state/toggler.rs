//! Theme toggler: keeps storage, in-memory theme, and page visuals in sync.
//!
//! DESIGN
//! ======
//! The toggler owns the current [`Theme`] and the last applied
//! [`Presentation`]. Storage and body access are injected, so the same code
//! drives `localStorage`/`document.body` in the browser and in-memory doubles
//! in tests.
//!
//! Storage is best-effort. A failed read falls back to the configured default
//! and a failed write leaves the flipped theme in place; both are logged.

#[cfg(test)]
#[path = "toggler_test.rs"]
mod toggler_test;

use super::config::ToggleConfig;
use super::theme::Theme;
use crate::util::page_body::PageBody;
use crate::util::presentation::{Presentation, render};
use crate::util::storage::PreferenceStore;

/// Binary theme toggle bound to a store and a page body.
#[derive(Debug)]
pub struct ThemeToggler<S, B> {
    config: ToggleConfig,
    store: S,
    body: B,
    theme: Theme,
    presentation: Presentation,
}

impl<S: PreferenceStore, B: PageBody> ThemeToggler<S, B> {
    /// Load the stored preference and apply it to the page.
    ///
    /// Nothing is written to storage here.
    pub fn initialize(config: ToggleConfig, store: S, body: B) -> Self {
        let theme = match store.read(&config.storage_key) {
            Ok(Some(raw)) => Theme::from_stored(&raw),
            Ok(None) => config.default_theme,
            Err(e) => {
                log::warn!("theme preference read failed, using {}: {e}", config.default_theme);
                config.default_theme
            }
        };

        let mut toggler = Self {
            config,
            store,
            body,
            theme,
            presentation: render(theme),
        };
        toggler.apply(theme);
        log::debug!("theme initialized: {theme}");
        toggler
    }

    /// Push the visuals for `theme` to the page and the control.
    ///
    /// Does not change the current theme or touch storage.
    pub fn apply(&mut self, theme: Theme) {
        let presentation = render(theme);
        self.body.set_marker(&self.config.marker_class, presentation.dark_marker);
        if let Some(background) = presentation.body_background {
            self.body.set_background(background);
        }
        self.presentation = presentation;
    }

    /// Handle a click on the control: flip, apply, persist.
    pub fn on_activate(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.theme = next;
        self.apply(next);
        if let Err(e) = self.store.write(&self.config.storage_key, next.as_str()) {
            log::warn!("theme preference write failed: {e}");
        }
        log::debug!("theme toggled: {next}");
        next
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Visuals most recently applied.
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn body(&self) -> &B {
        &self.body
    }
}
