//! The preference engine: validated writes fanned out to both storage
//! channels, plus the in-memory state the UI observes.
//!
//! One engine instance exists per tab, constructed at application boot
//! and injected into the component tree (no module-level singletons, so
//! tests build a fresh engine per case). The hydration reconciler
//! (`hydrate.rs`), cross-tab handler (`sync.rs`), and reset coordinator
//! (`reset.rs`) are separate impl blocks over this struct.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::channel::{LocalChannel, RemoteChannel};
use crate::key::PrefKey;
use crate::registry::ThemeRegistry;
use crate::resolve::{self, Resolved, ScopedEntry, ScopedMap};
use crate::state::{ColorMode, LayoutMode, PrefsState, ServerSnapshot};

/// Preference engine generic over the two storage channels and the
/// theme registry.
pub struct PrefsEngine<L, R, G> {
    pub(crate) registry: G,
    pub(crate) local: L,
    pub(crate) remote: R,
    pub(crate) state: PrefsState,
    pub(crate) hydrated: bool,
}

impl<L, R, G> PrefsEngine<L, R, G>
where
    L: LocalChannel,
    R: RemoteChannel,
    G: ThemeRegistry,
{
    /// Build an engine whose state mirrors what the server rendered
    /// with, falling back to defaults for absent or malformed cookie
    /// entries. The durable channel is not consulted yet; that is the
    /// hydration reconciler's job, strictly after first paint.
    pub fn boot(registry: G, local: L, remote: R, server: &ServerSnapshot) -> Self {
        let mut state = PrefsState::defaults(&registry);
        if let Some(theme) = server.theme.as_deref() {
            if registry.is_scope(theme) {
                state.theme = theme.to_owned();
                state.wallpaper.value = registry.default_wallpaper(theme).to_owned();
            }
        }
        if let Some(wallpaper) = server.wallpaper.as_deref() {
            if registry.is_compatible(&state.theme, wallpaper) {
                state.wallpaper = Resolved {
                    value: wallpaper.to_owned(),
                    enabled: true,
                };
            }
        }
        if let Some(mode) = server.color_mode.as_deref().and_then(ColorMode::parse) {
            state.color_mode = mode;
        }
        if let Some(mode) = server.layout_mode.as_deref().and_then(LayoutMode::parse) {
            state.layout_mode = mode;
        }
        Self {
            registry,
            local,
            remote,
            state,
            hydrated: false,
        }
    }

    /// Read-only view for the UI layer.
    #[must_use]
    pub fn state(&self) -> &PrefsState {
        &self.state
    }

    /// Raw scoped wallpaper map from the durable channel. Entries that
    /// lost a compatibility check stay queryable here for diagnostics
    /// even though they are not rendered.
    #[must_use]
    pub fn stored_wallpapers(&self) -> ScopedMap {
        resolve::parse_map(self.local.read(PrefKey::Wallpaper.storage_key()).as_deref())
    }

    /// Change the active theme (the scope). Re-resolves the wallpaper
    /// for the new scope from the durable map, restoring whatever was
    /// chosen under that theme before.
    pub fn set_theme(&mut self, id: &str) {
        if !self.registry.is_scope(id) {
            debug_assert!(false, "unknown theme id: {id}");
            log::warn!("ignoring write of unknown theme id {id:?}");
            return;
        }
        if self.state.theme == id {
            return;
        }
        self.state.theme = id.to_owned();
        self.write_local(PrefKey::Theme, id);
        self.remote.write(PrefKey::Theme.storage_key(), id);
        self.refresh_wallpaper();
    }

    /// Pick a wallpaper for the active theme. The on/off flag is left
    /// as it was; it is orthogonal to which wallpaper is selected.
    pub fn set_wallpaper(&mut self, value: &str) {
        if !self.registry.is_compatible(&self.state.theme, value) {
            debug_assert!(
                false,
                "wallpaper {value:?} is not compatible with theme {:?}",
                self.state.theme
            );
            log::warn!("ignoring incompatible wallpaper {value:?}");
            return;
        }
        let enabled = self.state.wallpaper.enabled;
        let mut map = self.stored_wallpapers();
        map.insert(
            self.state.theme.clone(),
            ScopedEntry {
                value: value.to_owned(),
                enabled,
            },
        );
        self.persist_wallpapers(&map);
        self.state.wallpaper = Resolved {
            value: value.to_owned(),
            enabled,
        };
        self.push_wallpaper_remote();
    }

    /// Turn the active theme's wallpaper on or off without discarding
    /// the stored selection.
    pub fn set_wallpaper_enabled(&mut self, enabled: bool) {
        let mut map = self.stored_wallpapers();
        let stored_value = map
            .get(&self.state.theme)
            .map_or_else(|| self.state.wallpaper.value.clone(), |e| e.value.clone());
        map.insert(
            self.state.theme.clone(),
            ScopedEntry {
                value: stored_value,
                enabled,
            },
        );
        self.persist_wallpapers(&map);
        self.state.wallpaper = resolve::resolve(&self.registry, &self.state.theme, &map);
        self.push_wallpaper_remote();
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        if self.state.color_mode == mode {
            return;
        }
        self.state.color_mode = mode;
        self.write_local(PrefKey::ColorMode, mode.as_str());
        self.remote.write(PrefKey::ColorMode.storage_key(), mode.as_str());
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        if self.state.layout_mode == mode {
            return;
        }
        self.state.layout_mode = mode;
        self.write_local(PrefKey::LayoutMode, mode.as_str());
        self.remote.write(PrefKey::LayoutMode.storage_key(), mode.as_str());
    }

    /// Re-resolve the wallpaper after a scope change and refresh the
    /// server-visible channel with the new effective value. The stored
    /// map is left untouched: an incompatible entry under the new
    /// scope falls back for rendering but stays queryable.
    pub(crate) fn refresh_wallpaper(&mut self) {
        let map = self.stored_wallpapers();
        self.state.wallpaper = resolve::resolve(&self.registry, &self.state.theme, &map);
        self.push_wallpaper_remote();
    }

    pub(crate) fn push_wallpaper_remote(&self) {
        self.remote.write(
            PrefKey::Wallpaper.storage_key(),
            resolve::effective_value(&self.state.wallpaper),
        );
    }

    pub(crate) fn write_local(&self, key: PrefKey, raw: &str) {
        if let Err(e) = self.local.write(key.storage_key(), raw) {
            log::warn!("durable write for {} failed: {e}", key.storage_key());
        }
    }

    pub(crate) fn persist_wallpapers(&self, map: &ScopedMap) {
        if let Some(raw) = resolve::serialize_map(map) {
            self.write_local(PrefKey::Wallpaper, &raw);
        }
    }
}
