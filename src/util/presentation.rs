//! Declarative visuals for each theme.
//!
//! `render` is pure: it maps a [`Theme`] to everything the page should show
//! for it. The toggler pushes the body half to a `PageBody`; the component
//! binds the control half to the button.

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;

use crate::state::theme::Theme;

/// Inline body background forced by the light theme.
pub const LIGHT_BODY_BACKGROUND: &str = "#f6f7fb";

/// Fixed placement and shape of the floating control.
pub const CONTROL_BASE_STYLE: &str = "position: fixed; bottom: 18px; right: 18px; \
     padding: 8px 12px; border-radius: 18px; border: none; cursor: pointer; z-index: 1000;";

/// What the page looks like for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    /// Whether `<body>` carries the dark marker class.
    pub dark_marker: bool,
    /// Inline body background to set; `None` leaves the body's own value.
    pub body_background: Option<&'static str>,
    /// Control text. Names the theme the click switches to.
    pub label: &'static str,
    pub control_background: &'static str,
    pub control_color: &'static str,
}

impl Presentation {
    /// Full inline style for the control.
    pub fn control_style(&self) -> String {
        format!(
            "{CONTROL_BASE_STYLE} background: {}; color: {};",
            self.control_background, self.control_color
        )
    }
}

/// Visuals for `theme`.
pub fn render(theme: Theme) -> Presentation {
    match theme {
        Theme::Dark => Presentation {
            dark_marker: true,
            body_background: None,
            label: "\u{2600}\u{fe0f} Light",
            control_background: "rgba(255,255,255,0.12)",
            control_color: "#fff",
        },
        Theme::Light => Presentation {
            dark_marker: false,
            body_background: Some(LIGHT_BODY_BACKGROUND),
            label: "\u{1f319} Dark",
            control_background: "rgba(0,0,0,0.06)",
            control_color: "#000",
        },
    }
}
