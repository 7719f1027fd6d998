//! Root application component and SSR shell.
//!
//! The page body is plain portfolio content; what matters here is that
//! the resolved preferences are bound onto `<html>` as data attributes.
//! The server renders them from the preference cookie, so the first
//! paint is already styled correctly, and the same bindings update
//! reactively after hydration.

use leptos::prelude::*;
use leptos_meta::{Html, MetaTags, Stylesheet, Title, provide_meta_context};

use prefs::ServerSnapshot;

use crate::components::prefs_menu::PrefsMenu;
use crate::state::prefs::provide_prefs;
use crate::util::theme_attr::RootAttrs;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// An SSR host that parsed the request cookie provides a
/// [`ServerSnapshot`] via context before rendering; in the browser the
/// snapshot is read back from `document.cookie`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let server = use_context::<ServerSnapshot>();
    let prefs = provide_prefs(server);
    let state = prefs.state();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Portfolio"/>

        <Html
            attr:data-theme=move || state.with(|s| RootAttrs::from_state(s).theme)
            attr:data-wallpaper=move || state.with(|s| RootAttrs::from_state(s).wallpaper)
            attr:data-color-mode=move || state.with(|s| RootAttrs::from_state(s).color_mode)
            attr:data-layout=move || state.with(|s| RootAttrs::from_state(s).layout)
        />

        <main class="portfolio">
            <PrefsMenu/>
        </main>
    }
}
