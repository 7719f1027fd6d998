//! Theme, wallpaper, and mode controls.

use leptos::prelude::*;

use prefs::{ColorMode, LayoutMode, resolve};

use crate::state::prefs::use_prefs;
use crate::themes::THEMES;

/// Preference controls: theme picker, per-theme wallpaper picker with
/// an on/off toggle, color/layout mode switches, and the reset action.
#[component]
pub fn PrefsMenu() -> impl IntoView {
    let prefs = use_prefs();
    let state = prefs.state();

    let theme_buttons = THEMES
        .iter()
        .map(|theme| {
            let prefs = prefs.clone();
            let id = theme.id;
            view! {
                <button
                    class="prefs__theme"
                    class:prefs__theme--active=move || state.with(|s| s.theme == id)
                    on:click=move |_| prefs.set_theme(id)
                >
                    {id}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let wallpaper_buttons = {
        let prefs = prefs.clone();
        move || {
            let theme = state.with(|s| s.theme.clone());
            let Some(def) = THEMES.iter().find(|t| t.id == theme) else {
                return Vec::new();
            };
            def.wallpapers
                .iter()
                .map(|wallpaper| {
                    let prefs = prefs.clone();
                    let id = *wallpaper;
                    view! {
                        <button
                            class="prefs__wallpaper"
                            class:prefs__wallpaper--active=move || {
                                state.with(|s| resolve::effective_value(&s.wallpaper) == id)
                            }
                            on:click=move |_| prefs.set_wallpaper(id)
                        >
                            {id}
                        </button>
                    }
                })
                .collect::<Vec<_>>()
        }
    };

    let wallpaper_enabled = move || state.with(|s| s.wallpaper.enabled);
    let on_toggle_wallpaper = {
        let prefs = prefs.clone();
        move |_| prefs.set_wallpaper_enabled(!state.with_untracked(|s| s.wallpaper.enabled))
    };

    let on_color_mode = {
        let prefs = prefs.clone();
        move |mode: ColorMode| {
            let prefs = prefs.clone();
            move |_| prefs.set_color_mode(mode)
        }
    };
    let on_layout = {
        let prefs = prefs.clone();
        move |_| {
            let next = match state.with_untracked(|s| s.layout_mode) {
                LayoutMode::Cozy => LayoutMode::Compact,
                LayoutMode::Compact => LayoutMode::Cozy,
            };
            prefs.set_layout_mode(next);
        }
    };
    let on_reset = {
        let prefs = prefs.clone();
        move |_| prefs.reset_all()
    };

    view! {
        <aside class="prefs">
            <div class="prefs__themes">{theme_buttons}</div>
            <div class="prefs__wallpapers">{wallpaper_buttons}</div>
            <button class="prefs__toggle" on:click=on_toggle_wallpaper>
                {move || if wallpaper_enabled() { "Wallpaper on" } else { "Wallpaper off" }}
            </button>
            <div class="prefs__modes">
                <button on:click=on_color_mode(ColorMode::System)>"System"</button>
                <button on:click=on_color_mode(ColorMode::Light)>"Light"</button>
                <button on:click=on_color_mode(ColorMode::Dark)>"Dark"</button>
                <button on:click=on_layout>
                    {move || state.with(|s| s.layout_mode.as_str())}
                </button>
            </div>
            <button class="prefs__reset" on:click=on_reset>
                "Reset preferences"
            </button>
        </aside>
    }
}
