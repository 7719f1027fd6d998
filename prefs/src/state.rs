//! In-memory preference state observed by the UI layer.
//!
//! DESIGN
//! ======
//! The UI reads only this struct (wrapped in a reactive signal by the
//! client crate), never the storage channels directly. It always holds
//! the most recent successful resolution; the engine swaps whole
//! values in so the UI never observes a partially-updated set.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::registry::ThemeRegistry;
use crate::resolve::Resolved;

/// Light/dark preference, global across themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Follow the operating system's `prefers-color-scheme`.
    #[default]
    System,
    Light,
    Dark,
}

impl ColorMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored token. Malformed input reads as absent.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "system" => Some(Self::System),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Page density, global across themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    #[default]
    Cozy,
    Compact,
}

impl LayoutMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cozy => "cozy",
            Self::Compact => "compact",
        }
    }

    /// Parse a stored token. Malformed input reads as absent.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "cozy" => Some(Self::Cozy),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

/// The full preference set the UI renders from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefsState {
    /// Active theme id; the scope every scoped key resolves under.
    pub theme: String,
    /// Wallpaper resolved for the active theme.
    pub wallpaper: Resolved,
    pub color_mode: ColorMode,
    pub layout_mode: LayoutMode,
}

impl PrefsState {
    /// The documented default set for a registry.
    #[must_use]
    pub fn defaults(registry: &impl ThemeRegistry) -> Self {
        let theme = registry.default_scope().to_owned();
        let wallpaper = Resolved {
            value: registry.default_wallpaper(&theme).to_owned(),
            enabled: true,
        };
        Self {
            theme,
            wallpaper,
            color_mode: ColorMode::default(),
            layout_mode: LayoutMode::default(),
        }
    }
}

/// Per-key values the server rendered the page with, parsed from the
/// request cookie. Absent fields mean the cookie carried no entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerSnapshot {
    pub theme: Option<String>,
    pub wallpaper: Option<String>,
    pub color_mode: Option<String>,
    pub layout_mode: Option<String>,
}
