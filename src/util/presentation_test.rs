use super::*;

#[test]
fn dark_sets_marker_and_sun_label() {
    let p = render(Theme::Dark);
    assert!(p.dark_marker);
    assert_eq!(p.body_background, None);
    assert_eq!(p.label, "\u{2600}\u{fe0f} Light");
    assert_eq!(p.control_background, "rgba(255,255,255,0.12)");
    assert_eq!(p.control_color, "#fff");
}

#[test]
fn light_clears_marker_and_sets_background() {
    let p = render(Theme::Light);
    assert!(!p.dark_marker);
    assert_eq!(p.body_background, Some("#f6f7fb"));
    assert_eq!(p.label, "\u{1f319} Dark");
    assert_eq!(p.control_background, "rgba(0,0,0,0.06)");
    assert_eq!(p.control_color, "#000");
}

#[test]
fn render_is_deterministic() {
    assert_eq!(render(Theme::Light), render(Theme::Light));
    assert_ne!(render(Theme::Light), render(Theme::Dark));
}

#[test]
fn control_style_keeps_fixed_placement() {
    let style = render(Theme::Light).control_style();
    assert!(style.starts_with("position: fixed;"));
    assert!(style.contains("bottom: 18px; right: 18px;"));
    assert!(style.contains("z-index: 1000;"));
    assert!(style.ends_with("background: rgba(0,0,0,0.06); color: #000;"));
}
