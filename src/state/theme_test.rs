use super::*;

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn toggled_flips_between_variants() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn as_str_matches_storage_values() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Light.to_string(), "light");
}

#[test]
fn from_stored_treats_empty_as_dark() {
    assert_eq!(Theme::from_stored(""), Theme::Dark);
    assert_eq!(Theme::from_stored("dark"), Theme::Dark);
}

#[test]
fn from_stored_renders_unknown_values_as_light() {
    assert_eq!(Theme::from_stored("light"), Theme::Light);
    assert_eq!(Theme::from_stored("solarized"), Theme::Light);
}

#[test]
fn deserializes_lowercase_names() {
    let parsed: Theme = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(parsed, Theme::Dark);
    let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, Theme::Light);
    assert!(serde_json::from_str::<Theme>("\"Dark\"").is_err());
}
