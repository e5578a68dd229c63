//! Bottom Navigation Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::BOTTOM_BAR_SCREENS;

/// Tab bar for the bottom bar destinations
#[component]
pub fn BottomNav() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="bottom-nav">
            {BOTTOM_BAR_SCREENS.iter().map(|&screen| {
                let tab_class = move || {
                    if ctx.is_current(screen) { "bottom-nav-item active" } else { "bottom-nav-item" }
                };
                view! {
                    <button
                        class=tab_class
                        title=screen.title()
                        on:click=move |_| ctx.navigate(screen)
                    >
                        <div class="bottom-nav-icon">{screen.icon()}</div>
                        <div class="bottom-nav-label">{screen.title()}</div>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
