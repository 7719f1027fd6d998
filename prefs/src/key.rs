//! The fixed set of logical preference keys.
//!
//! Each key maps to one durable-local entry and one server-visible
//! cookie, both named by [`PrefKey::storage_key`]. Keys are either
//! global scalars or scoped maps keyed by theme id (only the wallpaper
//! is scoped today).

#[cfg(test)]
#[path = "key_test.rs"]
mod key_test;

/// One logical user setting synchronized by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefKey {
    /// Active theme id. Doubles as the scope every scoped key is
    /// interpreted under.
    Theme,
    /// Per-theme wallpaper selection with an on/off flag.
    Wallpaper,
    /// Light/dark/system color mode, global across themes.
    ColorMode,
    /// Page density, global across themes.
    LayoutMode,
}

impl PrefKey {
    /// Every registered key, in reset order.
    pub const ALL: [Self; 4] = [Self::Theme, Self::Wallpaper, Self::ColorMode, Self::LayoutMode];

    /// Stable name used for both the localStorage entry and the cookie.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Theme => "pf_theme",
            Self::Wallpaper => "pf_wallpaper",
            Self::ColorMode => "pf_color_mode",
            Self::LayoutMode => "pf_layout",
        }
    }

    /// Whether the key stores a per-theme map rather than one scalar.
    #[must_use]
    pub fn is_scoped(self) -> bool {
        matches!(self, Self::Wallpaper)
    }
}
