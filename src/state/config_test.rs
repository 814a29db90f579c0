use super::*;

#[test]
fn default_config_uses_theme_key_and_dark() {
    let config = ToggleConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.default_theme, Theme::Dark);
    assert_eq!(config.marker_class, "dark");
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = ToggleConfig::from_json(r#"{"storage_key":"site_theme"}"#).unwrap();
    assert_eq!(config.storage_key, "site_theme");
    assert_eq!(config.default_theme, Theme::Dark);
    assert_eq!(config.marker_class, "dark");
}

#[test]
fn from_json_accepts_empty_object() {
    assert_eq!(ToggleConfig::from_json("{}").unwrap(), ToggleConfig::default());
}

#[test]
fn from_json_reads_default_theme() {
    let config = ToggleConfig::from_json(r#"{"default_theme":"light"}"#).unwrap();
    assert_eq!(config.default_theme, Theme::Light);
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(ToggleConfig::from_json("{"), Err(ConfigError::Parse(_))));
    assert!(matches!(
        ToggleConfig::from_json(r#"{"default_theme":"sepia"}"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn from_json_rejects_blank_storage_key() {
    let err = ToggleConfig::from_json(r#"{"storage_key":"  "}"#).unwrap_err();
    assert!(err.to_string().contains("storage_key"));
}

#[test]
fn resolve_without_attribute_is_default() {
    assert_eq!(ToggleConfig::resolve(None), ToggleConfig::default());
}

#[test]
fn resolve_applies_valid_json() {
    let config = ToggleConfig::resolve(Some(r#"{"marker_class":"theme-dark"}"#));
    assert_eq!(config.marker_class, "theme-dark");
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn resolve_falls_back_on_invalid_json() {
    assert_eq!(ToggleConfig::resolve(Some("not json")), ToggleConfig::default());
    assert_eq!(ToggleConfig::resolve(Some(r#"{"storage_key":""}"#)), ToggleConfig::default());
}
