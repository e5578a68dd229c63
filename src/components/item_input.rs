//! Item Input Component
//!
//! Text field and "Add" button for new shopping items.

use leptos::prelude::*;

/// Controlled input row; submitting (button or Enter) calls `on_add`
#[component]
pub fn ItemInput(
    #[prop(into)] text: Signal<String>,
    #[prop(into)] on_text_change: Callback<String>,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add.run(());
    };

    view! {
        <form class="item-input" on:submit=submit>
            <input
                type="text"
                placeholder="Tambah item belanja..."
                prop:value=move || text.get()
                on:input=move |ev| on_text_change.run(event_target_value(&ev))
            />
            <button type="submit" disabled=move || text.get().trim().is_empty()>
                "Add"
            </button>
        </form>
    }
}
