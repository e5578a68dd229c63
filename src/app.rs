//! Shopping List App
//!
//! Navigation shell: drawer, top bar, bottom bar and the current screen.

use leptos::ev;
use leptos::prelude::*;
use leptos_nav::create_nav;
use reactive_stores::Store;

use crate::components::{BottomNav, NavDrawer, TopBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Screen;
use crate::screens::{HomeScreen, ProfileScreen, SettingScreen};
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let transition_ms = config.transition_ms;

    // State
    let store = Store::new(AppState::default());
    let nav = create_nav(Screen::Home);
    let entering = signal(false);

    // Provide context to all children
    provide_context(store);
    provide_context(StoredValue::new(config));
    let ctx = AppContext::new(nav, store, entering, transition_ms);
    provide_context(ctx);

    // Deep link via `#route`
    let initial = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    let initial = initial.trim_start_matches('#');
    if !initial.is_empty() {
        ctx.navigate_route(initial);
    }

    // Escape acts as back
    let back_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.back();
        }
    });
    on_cleanup(move || back_listener.remove());

    let host_class = move || {
        if ctx.entering.get() { "screen-host entering" } else { "screen-host" }
    };

    view! {
        <div
            class="app-layout"
            style=format!("--transition-ms: {}ms", transition_ms)
        >
            <NavDrawer />
            <TopBar />

            <main class=host_class>
                {move || match ctx.current() {
                    Screen::Home => view! { <HomeScreen /> }.into_any(),
                    Screen::Profile => view! { <ProfileScreen /> }.into_any(),
                    Screen::Setting => view! { <SettingScreen /> }.into_any(),
                }}
            </main>

            <BottomNav />
        </div>
    }
}
