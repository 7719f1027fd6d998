//! Reactive preference context provided to the component tree.
//!
//! DESIGN
//! ======
//! One engine instance per tab, constructed at app boot and provided
//! via context, never as a module-level singleton. Components observe
//! the `RwSignal<PrefsState>` only; every write goes through the engine,
//! which fans out to both storage channels, and the signal is then
//! refreshed from the engine's state in one `set` so the UI never
//! sees a partially-applied update.
//!
//! Ordering: the hydration reconciler is scheduled on the first
//! animation frame after the initial client render commits, so the
//! user's first paint is exactly what the server rendered. Cross-tab
//! `storage` events that arrive before that are dropped by the engine;
//! the reconciler reads the durable channel directly afterwards.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use prefs::{ChangeBus, ColorMode, LayoutMode, PrefKey, PrefsEngine, PrefsState, ServerSnapshot};

use crate::net::sync::HttpRemote;
use crate::themes::StaticThemes;
use crate::util::cookie;
use crate::util::local_store::BrowserLocal;
use crate::util::storage_bus::StorageBus;

/// Engine wired to the browser-backed channels.
pub type AppEngine = PrefsEngine<BrowserLocal, HttpRemote, StaticThemes>;

/// Handle components use to read and write preferences.
#[derive(Clone)]
pub struct PrefsContext {
    state: RwSignal<PrefsState>,
    engine: Arc<Mutex<AppEngine>>,
}

/// Construct the per-tab engine, wire cross-tab sync, schedule the
/// one-shot hydration reconciler, and provide the context.
///
/// `server` is the snapshot the page was rendered with; SSR hosts pass
/// it down via context, and in the browser it is read back from
/// `document.cookie`.
pub fn provide_prefs(server: Option<ServerSnapshot>) -> PrefsContext {
    let snapshot = server.unwrap_or_else(cookie::read_snapshot);
    let engine = AppEngine::boot(StaticThemes, BrowserLocal, HttpRemote, &snapshot);
    let ctx = PrefsContext {
        state: RwSignal::new(engine.state().clone()),
        engine: Arc::new(Mutex::new(engine)),
    };
    ctx.install_cross_tab_sync();
    ctx.schedule_hydration(snapshot);
    provide_context(ctx.clone());
    ctx
}

/// Fetch the context provided by [`provide_prefs`].
#[must_use]
pub fn use_prefs() -> PrefsContext {
    expect_context::<PrefsContext>()
}

impl PrefsContext {
    /// The reactive state components render from.
    #[must_use]
    pub fn state(&self) -> RwSignal<PrefsState> {
        self.state
    }

    /// Change the active theme; the wallpaper chosen under the new
    /// theme is restored automatically.
    pub fn set_theme(&self, id: &str) {
        self.with_engine(|engine| engine.set_theme(id));
    }

    pub fn set_wallpaper(&self, value: &str) {
        self.with_engine(|engine| engine.set_wallpaper(value));
    }

    pub fn set_wallpaper_enabled(&self, enabled: bool) {
        self.with_engine(|engine| engine.set_wallpaper_enabled(enabled));
    }

    pub fn set_color_mode(&self, mode: ColorMode) {
        self.with_engine(|engine| engine.set_color_mode(mode));
    }

    pub fn set_layout_mode(&self, mode: LayoutMode) {
        self.with_engine(|engine| engine.set_layout_mode(mode));
    }

    /// Clear every preference from both channels and restore defaults,
    /// as one logical update.
    pub fn reset_all(&self) {
        self.with_engine(PrefsEngine::reset_all);
    }

    fn with_engine(&self, f: impl FnOnce(&mut AppEngine)) {
        let mut engine = self.engine.lock().expect("engine lock poisoned");
        f(&mut engine);
        let next = engine.state().clone();
        drop(engine);
        if next != self.state.get_untracked() {
            self.state.set(next);
        }
    }

    fn install_cross_tab_sync(&self) {
        let bus = StorageBus;
        for key in PrefKey::ALL {
            let ctx = self.clone();
            bus.subscribe(
                key.storage_key(),
                Box::new(move |raw| ctx.on_external(key, raw.as_deref())),
            );
        }
    }

    fn on_external(&self, key: PrefKey, raw: Option<&str>) {
        let changed = self
            .engine
            .lock()
            .expect("engine lock poisoned")
            .apply_external(key, raw);
        if changed {
            self.state
                .set(self.engine.lock().expect("engine lock poisoned").state().clone());
        }
    }

    fn schedule_hydration(&self, snapshot: ServerSnapshot) {
        let ctx = self.clone();
        Effect::new(move |_| {
            // Effects run client-side only, after the render commits;
            // the next frame is therefore strictly after first paint.
            let ctx = ctx.clone();
            let snapshot = snapshot.clone();
            request_animation_frame(move || {
                ctx.with_engine(|engine| engine.hydrate(&snapshot));
            });
        });
    }
}
