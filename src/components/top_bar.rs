//! Top App Bar Component
//!
//! Menu button that opens the drawer plus the current screen title.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="top-bar">
            <button
                class="top-bar-menu"
                title="Menu"
                aria-label="Menu"
                on:click=move |_| ctx.open_drawer()
            >
                "☰"
            </button>
            <h1 class="top-bar-title">{move || ctx.current().title()}</h1>
        </header>
    }
}
