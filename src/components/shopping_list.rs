//! Shopping List Component
//!
//! Scrollable list of the (filtered) items.

use leptos::prelude::*;

use crate::models::ShoppingItem;

#[component]
pub fn ShoppingList(
    #[prop(into)] items: Signal<Vec<ShoppingItem>>,
    /// Total before filtering, for the count line
    #[prop(into)] total: Signal<usize>,
) -> impl IntoView {
    let count_text = move || {
        let shown = items.with(|i| i.len());
        let total = total.get();
        if shown == total {
            format!("{} items", total)
        } else {
            format!("{} of {} items", shown, total)
        }
    };

    view! {
        <div class="shopping-list">
            <Show
                when=move || !items.with(|i| i.is_empty())
                fallback=move || view! {
                    <p class="shopping-list-empty">
                        {move || if total.get() == 0 { "Belum ada item" } else { "Tidak ada item yang cocok" }}
                    </p>
                }
            >
                <ul>
                    // Items have no identity, key by position
                    <For
                        each=move || items.get().into_iter().enumerate()
                        key=|(idx, item)| (*idx, item.clone())
                        children=move |(_, item)| view! {
                            <li class="shopping-list-item">{item.to_string()}</li>
                        }
                    />
                </ul>
            </Show>
            <p class="item-count">{count_text}</p>
        </div>
    }
}
