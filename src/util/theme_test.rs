use super::*;

#[test]
fn flip_alternates() {
    assert_eq!(Theme::Light.flip(), Theme::Dark);
    assert_eq!(Theme::Dark.flip(), Theme::Light);
    assert_eq!(Theme::Dark.flip().flip(), Theme::Dark);
}

#[test]
fn name_round_trips_through_from_name() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_name(theme.name()), Some(theme));
    }
}

#[test]
fn from_name_rejects_unknown_values() {
    // Stored preferences are untrusted; junk falls back to the default.
    assert_eq!(Theme::from_name("true"), None);
    assert_eq!(Theme::from_name("DARK"), None);
    assert_eq!(Theme::from_name(""), None);
}

#[test]
fn load_defaults_to_light_outside_the_browser() {
    assert_eq!(Theme::load(), Theme::Light);
}
