use super::*;
use crate::testing::TestThemes;

#[test]
fn color_mode_tokens_round_trip() {
    for mode in [ColorMode::System, ColorMode::Light, ColorMode::Dark] {
        assert_eq!(ColorMode::parse(mode.as_str()), Some(mode));
    }
}

#[test]
fn color_mode_rejects_malformed_tokens() {
    assert_eq!(ColorMode::parse("DARK"), None);
    assert_eq!(ColorMode::parse(""), None);
    assert_eq!(ColorMode::parse("auto"), None);
}

#[test]
fn layout_mode_tokens_round_trip() {
    for mode in [LayoutMode::Cozy, LayoutMode::Compact] {
        assert_eq!(LayoutMode::parse(mode.as_str()), Some(mode));
    }
}

#[test]
fn defaults_follow_the_registry() {
    let state = PrefsState::defaults(&TestThemes);
    assert_eq!(state.theme, "remedy");
    assert_eq!(state.wallpaper.value, "remedy-slab");
    assert!(state.wallpaper.enabled);
    assert_eq!(state.color_mode, ColorMode::System);
    assert_eq!(state.layout_mode, LayoutMode::Cozy);
}
