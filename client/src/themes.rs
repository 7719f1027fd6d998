//! The portfolio's theme catalog and wallpaper compatibility data.
//!
//! Static tables; the palette/contrast derivation for each theme lives
//! in the build-time CSS step, not here. This module only answers the
//! registry queries the preference engine needs.

#[cfg(test)]
#[path = "themes_test.rs"]
mod themes_test;

use prefs::{ThemeRegistry, UNIVERSAL_WALLPAPER};

/// One theme's identity and wallpaper set.
pub struct ThemeDef {
    pub id: &'static str,
    pub default_wallpaper: &'static str,
    pub wallpapers: &'static [&'static str],
}

/// Every shipped theme. The first entry is the default.
pub const THEMES: &[ThemeDef] = &[
    ThemeDef {
        id: "remedy",
        default_wallpaper: "remedy-slab",
        wallpapers: &["remedy-slab", "remedy-dither", "remedy-atrium"],
    },
    ThemeDef {
        id: "gruvbox",
        default_wallpaper: "gruvbox-pines",
        wallpapers: &["gruvbox-pines", "gruvbox-haze"],
    },
    ThemeDef {
        id: "rosepine",
        default_wallpaper: "rosepine-moss",
        wallpapers: &["rosepine-moss", "rosepine-fog"],
    },
    ThemeDef {
        id: "paper",
        default_wallpaper: "paper-grain",
        wallpapers: &["paper-grain"],
    },
];

const THEME_IDS: [&str; 4] = ["remedy", "gruvbox", "rosepine", "paper"];

fn find(id: &str) -> Option<&'static ThemeDef> {
    THEMES.iter().find(|theme| theme.id == id)
}

/// Registry over the static catalog.
pub struct StaticThemes;

impl ThemeRegistry for StaticThemes {
    fn scope_ids(&self) -> &[&str] {
        &THEME_IDS
    }

    fn default_scope(&self) -> &str {
        THEMES[0].id
    }

    fn default_wallpaper(&self, scope: &str) -> &str {
        find(scope).map_or(UNIVERSAL_WALLPAPER, |theme| theme.default_wallpaper)
    }

    fn is_compatible(&self, scope: &str, candidate: &str) -> bool {
        if candidate == UNIVERSAL_WALLPAPER {
            return true;
        }
        find(scope).is_some_and(|theme| theme.wallpapers.contains(&candidate))
    }
}
