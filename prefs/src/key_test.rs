use super::*;

#[test]
fn storage_keys_are_unique() {
    for (i, a) in PrefKey::ALL.iter().enumerate() {
        for (j, b) in PrefKey::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.storage_key(), b.storage_key());
            }
        }
    }
}

#[test]
fn all_covers_every_key_once() {
    assert_eq!(PrefKey::ALL.len(), 4);
    assert_eq!(PrefKey::ALL[0], PrefKey::Theme);
}

#[test]
fn only_wallpaper_is_scoped() {
    assert!(PrefKey::Wallpaper.is_scoped());
    assert!(!PrefKey::Theme.is_scoped());
    assert!(!PrefKey::ColorMode.is_scoped());
    assert!(!PrefKey::LayoutMode.is_scoped());
}
