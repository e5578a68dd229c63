//! Search Input Component

use leptos::prelude::*;

#[component]
pub fn SearchInput(
    #[prop(into)] query: Signal<String>,
    #[prop(into)] on_query_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-input">
            <span class="search-icon">"🔍"</span>
            <input
                type="search"
                placeholder="Cari item..."
                prop:value=move || query.get()
                on:input=move |ev| on_query_change.run(event_target_value(&ev))
            />
            <Show when=move || !query.get().is_empty()>
                <button
                    class="search-clear"
                    title="Clear"
                    on:click=move |_| on_query_change.run(String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
