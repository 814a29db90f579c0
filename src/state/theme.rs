//! The binary theme preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use serde::Deserialize;

/// Page theme. Stored as `"dark"` or `"light"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Storage representation of the theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Decode a value read back from storage.
    ///
    /// Empty strings count as unset and yield [`Theme::Dark`]. Any other value
    /// that is not `"dark"` renders as [`Theme::Light`], so a corrupted entry
    /// still produces a consistent page.
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "" | "dark" => Self::Dark,
            "light" => Self::Light,
            other => {
                log::debug!("unrecognized stored theme {other:?}, rendering light");
                Self::Light
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
