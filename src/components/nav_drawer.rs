//! Navigation Drawer Component
//!
//! Modal drawer with a scrim; tapping the scrim closes it.

use leptos::prelude::*;

use crate::config::use_config;
use crate::context::use_app_context;
use crate::models::DRAWER_SCREENS;

#[component]
pub fn NavDrawer() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let title = config.with_value(|c| c.drawer_title.clone());

    view! {
        <Show when=move || ctx.drawer_open()>
            <div class="drawer-scrim" on:click=move |_| ctx.close_drawer()></div>
        </Show>
        <nav class=move || if ctx.drawer_open() { "drawer open" } else { "drawer" }>
            <div class="drawer-title">{title}</div>
            <hr class="drawer-divider" />
            {DRAWER_SCREENS.iter().map(|&screen| {
                let item_class = move || {
                    if ctx.is_current(screen) { "drawer-item selected" } else { "drawer-item" }
                };
                view! {
                    <button class=item_class on:click=move |_| ctx.navigate(screen)>
                        <span class="drawer-item-icon">{screen.icon()}</span>
                        <span class="drawer-item-label">{screen.title()}</span>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
