//! Toggle configuration.
//!
//! Pages normally run with [`ToggleConfig::default`]. A JSON object in the
//! body's `data-theme-toggle` attribute overrides individual fields, so a page
//! can pick another storage key or starting theme without rebuilding.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use super::theme::Theme;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Body class applied while the dark theme is active.
pub const DEFAULT_MARKER_CLASS: &str = "dark";

/// Errors raised while loading a [`ToggleConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),
}

/// Settings for one theme toggle instance.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// `localStorage` key holding the preference.
    pub storage_key: String,
    /// Theme used when storage holds no preference.
    pub default_theme: Theme,
    /// Class toggled on `<body>` for the dark theme.
    pub marker_class: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            default_theme: Theme::Dark,
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
        }
    }
}

impl ToggleConfig {
    /// Parse a config from JSON. Absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, unknown theme names,
    /// or an empty storage key.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if config.storage_key.trim().is_empty() {
            return Err(ConfigError::Parse("storage_key must not be empty".to_owned()));
        }
        Ok(config)
    }

    /// Config for an optional attribute value. Invalid input is logged and
    /// replaced by the defaults.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                log::warn!("ignoring theme toggle config: {e}");
                Self::default()
            }),
        }
    }
}
