//! Mapping preference state to the `<html>` data attributes the
//! stylesheets select on.
//!
//! The server renders these attributes from the cookie and the client
//! binds them reactively, so the first paint and every later update
//! use the same mapping. `ColorMode::System` is emitted as-is; the
//! stylesheet resolves it against `prefers-color-scheme`.

#[cfg(test)]
#[path = "theme_attr_test.rs"]
mod theme_attr_test;

use prefs::{PrefsState, resolve};

/// Attribute values derived from one preference state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootAttrs {
    pub theme: String,
    pub wallpaper: String,
    pub color_mode: &'static str,
    pub layout: &'static str,
}

impl RootAttrs {
    #[must_use]
    pub fn from_state(state: &PrefsState) -> Self {
        Self {
            theme: state.theme.clone(),
            wallpaper: resolve::effective_value(&state.wallpaper).to_owned(),
            color_mode: state.color_mode.as_str(),
            layout: state.layout_mode.as_str(),
        }
    }
}
