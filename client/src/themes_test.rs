use super::*;

#[test]
fn theme_ids_table_matches_the_catalog() {
    assert_eq!(THEME_IDS.len(), THEMES.len());
    for theme in THEMES {
        assert!(THEME_IDS.contains(&theme.id));
    }
}

#[test]
fn every_default_wallpaper_is_in_its_own_set() {
    for theme in THEMES {
        assert!(
            theme.wallpapers.contains(&theme.default_wallpaper),
            "{} default missing from its wallpaper set",
            theme.id
        );
    }
}

#[test]
fn wallpaper_ids_are_globally_unique() {
    let mut seen = std::collections::HashSet::new();
    for theme in THEMES {
        for wallpaper in theme.wallpapers {
            assert!(seen.insert(*wallpaper), "duplicate wallpaper id {wallpaper}");
        }
    }
}

#[test]
fn universal_wallpaper_is_compatible_everywhere() {
    for theme in THEMES {
        assert!(StaticThemes.is_compatible(theme.id, UNIVERSAL_WALLPAPER));
    }
    assert!(StaticThemes.is_compatible("no-such-theme", UNIVERSAL_WALLPAPER));
}

#[test]
fn wallpapers_do_not_leak_across_themes() {
    assert!(StaticThemes.is_compatible("remedy", "remedy-dither"));
    assert!(!StaticThemes.is_compatible("gruvbox", "remedy-dither"));
    assert!(!StaticThemes.is_compatible("paper", "gruvbox-haze"));
}

#[test]
fn default_scope_is_the_first_catalog_entry() {
    assert_eq!(StaticThemes.default_scope(), "remedy");
    assert!(StaticThemes.is_scope("remedy"));
    assert!(!StaticThemes.is_scope("plain"));
}
