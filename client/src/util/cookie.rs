//! Reading the server-visible channel.
//!
//! `document.cookie` at hydration time is exactly what the server
//! rendered the page with, so it serves as the reconciler's server
//! snapshot. This module only reads; writes go through the sync
//! endpoint, which answers with `Set-Cookie` (path `/`, no explicit
//! expiry). Cookie values are bare tokens (theme and wallpaper ids,
//! mode names), so no percent-encoding is involved.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use prefs::{PrefKey, ServerSnapshot};

/// Extract one cookie's value from a `document.cookie`-shaped string.
#[must_use]
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_owned())
    })
}

/// Build the reconciler's server snapshot from a cookie string.
#[must_use]
pub fn snapshot_from_header(header: &str) -> ServerSnapshot {
    ServerSnapshot {
        theme: cookie_value(header, PrefKey::Theme.storage_key()),
        wallpaper: cookie_value(header, PrefKey::Wallpaper.storage_key()),
        color_mode: cookie_value(header, PrefKey::ColorMode.storage_key()),
        layout_mode: cookie_value(header, PrefKey::LayoutMode.storage_key()),
    }
}

/// Snapshot of the values the current page was rendered with.
/// Empty on the server; SSR hosts provide the snapshot via context.
#[must_use]
pub fn read_snapshot() -> ServerSnapshot {
    snapshot_from_header(&document_cookie())
}

fn document_cookie() -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
