//! Hydration reconciler: one-shot convergence of the two channels
//! after first paint.
//!
//! The first paint must use the value the server already rendered with
//! (the cookie), so this runs strictly after the initial render
//! commits. It then compares the cookie against the durable local
//! channel and decisively picks one: durable local wins, and the
//! server-visible channel is written back into agreement for the next
//! navigation. The whole procedure is idempotent and guarded so it
//! runs at most once per page load.

#[cfg(test)]
#[path = "hydrate_test.rs"]
mod hydrate_test;

use crate::channel::{LocalChannel, RemoteChannel};
use crate::key::PrefKey;
use crate::registry::ThemeRegistry;
use crate::resolve::{self, ScopedEntry};
use crate::state::{ColorMode, LayoutMode, ServerSnapshot};

use crate::engine::PrefsEngine;

impl<L, R, G> PrefsEngine<L, R, G>
where
    L: LocalChannel,
    R: RemoteChannel,
    G: ThemeRegistry,
{
    /// Reconcile in-memory state and the server-visible channel with
    /// the durable local channel. Runs at most once per engine.
    pub fn hydrate(&mut self, server: &ServerSnapshot) {
        if self.hydrated {
            return;
        }
        self.hydrated = true;
        // Theme first: it is the scope the wallpaper resolves under.
        self.hydrate_theme(server.theme.as_deref());
        self.hydrate_wallpaper(server.wallpaper.as_deref());
        self.hydrate_color_mode(server.color_mode.as_deref());
        self.hydrate_layout_mode(server.layout_mode.as_deref());
    }

    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    fn hydrate_theme(&mut self, server: Option<&str>) {
        let local = self
            .local
            .read(PrefKey::Theme.storage_key())
            .filter(|id| self.registry.is_scope(id));
        match local {
            Some(id) => {
                if server != Some(id.as_str()) {
                    self.remote.write(PrefKey::Theme.storage_key(), &id);
                }
                self.state.theme = id;
            }
            None => {
                // First visit on this device but the cookie survived an
                // earlier session: seed the durable channel from it.
                if let Some(value) = server {
                    if value != self.registry.default_scope() && self.registry.is_scope(value) {
                        self.write_local(PrefKey::Theme, value);
                    }
                }
            }
        }
    }

    fn hydrate_wallpaper(&mut self, server: Option<&str>) {
        let mut map = self.stored_wallpapers();
        let scope = self.state.theme.clone();
        if let Some(entry) = map.get(&scope).cloned() {
            let resolved = resolve::resolve(&self.registry, &scope, &map);
            if resolved.value != entry.value {
                // Incompatible carry-over: persist the corrected
                // fallback so reloads do not repeat this correction.
                map.insert(
                    scope,
                    ScopedEntry {
                        value: resolved.value.clone(),
                        enabled: resolved.enabled,
                    },
                );
                self.persist_wallpapers(&map);
            }
            let effective = resolve::effective_value(&resolved).to_owned();
            if server != Some(effective.as_str()) {
                self.remote.write(PrefKey::Wallpaper.storage_key(), &effective);
            }
            self.state.wallpaper = resolved;
        } else {
            let adoptable = server.filter(|value| {
                *value != self.registry.default_wallpaper(&scope)
                    && self.registry.is_compatible(&scope, value)
            });
            if let Some(value) = adoptable {
                map.insert(
                    scope,
                    ScopedEntry {
                        value: value.to_owned(),
                        enabled: true,
                    },
                );
                self.persist_wallpapers(&map);
                self.state.wallpaper = resolve::Resolved {
                    value: value.to_owned(),
                    enabled: true,
                };
            } else {
                // Nothing durable and nothing to adopt: the scope
                // default (the scope may have changed just above).
                self.state.wallpaper = resolve::resolve(&self.registry, &scope, &map);
            }
        }
    }

    fn hydrate_color_mode(&mut self, server: Option<&str>) {
        let local = self
            .local
            .read(PrefKey::ColorMode.storage_key())
            .filter(|raw| ColorMode::parse(raw).is_some());
        match local {
            Some(raw) => {
                if server != Some(raw.as_str()) {
                    self.remote.write(PrefKey::ColorMode.storage_key(), &raw);
                }
                if let Some(mode) = ColorMode::parse(&raw) {
                    self.state.color_mode = mode;
                }
            }
            None => {
                if let Some(value) = server {
                    let parsed = ColorMode::parse(value);
                    if parsed.is_some() && parsed != Some(ColorMode::default()) {
                        self.write_local(PrefKey::ColorMode, value);
                    }
                }
            }
        }
    }

    fn hydrate_layout_mode(&mut self, server: Option<&str>) {
        let local = self
            .local
            .read(PrefKey::LayoutMode.storage_key())
            .filter(|raw| LayoutMode::parse(raw).is_some());
        match local {
            Some(raw) => {
                if server != Some(raw.as_str()) {
                    self.remote.write(PrefKey::LayoutMode.storage_key(), &raw);
                }
                if let Some(mode) = LayoutMode::parse(&raw) {
                    self.state.layout_mode = mode;
                }
            }
            None => {
                if let Some(value) = server {
                    let parsed = LayoutMode::parse(value);
                    if parsed.is_some() && parsed != Some(LayoutMode::default()) {
                        self.write_local(PrefKey::LayoutMode, value);
                    }
                }
            }
        }
    }
}
