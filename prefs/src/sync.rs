//! Cross-tab synchronization: applying durable-channel changes made by
//! other tabs.
//!
//! The client crate subscribes these handlers to the browser `storage`
//! event (which never fires in the writing tab). Notifications are
//! applied in arrival order per key; last applied wins, consistent
//! with the store's last-write-wins rule. A change that survives
//! re-resolution also refreshes the server-visible channel so a full
//! navigation in *this* tab reflects it too.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use crate::channel::{LocalChannel, RemoteChannel};
use crate::engine::PrefsEngine;
use crate::key::PrefKey;
use crate::registry::ThemeRegistry;
use crate::resolve;
use crate::state::{ColorMode, LayoutMode};

impl<L, R, G> PrefsEngine<L, R, G>
where
    L: LocalChannel,
    R: RemoteChannel,
    G: ThemeRegistry,
{
    /// Apply a durable-channel change observed from another tab.
    /// `raw` is the new stored payload (`None` when the entry was
    /// removed, e.g. by a reset in the other tab). Returns whether
    /// in-memory state changed.
    ///
    /// Events arriving before hydration are ignored; the reconciler
    /// reads the durable channel directly afterwards, so nothing is
    /// lost.
    pub fn apply_external(&mut self, key: PrefKey, raw: Option<&str>) -> bool {
        if !self.hydrated {
            return false;
        }
        match key {
            PrefKey::Theme => {
                let id = raw
                    .filter(|id| self.registry.is_scope(id))
                    .unwrap_or_else(|| self.registry.default_scope())
                    .to_owned();
                if self.state.theme == id {
                    return false;
                }
                self.state.theme = id.clone();
                self.remote.write(PrefKey::Theme.storage_key(), &id);
                self.refresh_wallpaper();
                true
            }
            PrefKey::Wallpaper => {
                let map = resolve::parse_map(raw);
                let resolved = resolve::resolve(&self.registry, &self.state.theme, &map);
                if resolved == self.state.wallpaper {
                    return false;
                }
                self.state.wallpaper = resolved;
                self.push_wallpaper_remote();
                true
            }
            PrefKey::ColorMode => {
                let mode = raw.and_then(ColorMode::parse).unwrap_or_default();
                if self.state.color_mode == mode {
                    return false;
                }
                self.state.color_mode = mode;
                self.remote.write(PrefKey::ColorMode.storage_key(), mode.as_str());
                true
            }
            PrefKey::LayoutMode => {
                let mode = raw.and_then(LayoutMode::parse).unwrap_or_default();
                if self.state.layout_mode == mode {
                    return false;
                }
                self.state.layout_mode = mode;
                self.remote.write(PrefKey::LayoutMode.storage_key(), mode.as_str());
                true
            }
        }
    }
}
