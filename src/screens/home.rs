//! Home Screen
//!
//! Shopping list: add row, search row and the filtered list.
//! State lives in the app store so it survives tab switches.

use leptos::prelude::*;

use crate::components::{ItemInput, SearchInput, ShoppingList};
use crate::store::{
    store_add_item, store_set_new_item_text, store_update_query, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn HomeScreen() -> impl IntoView {
    let store = use_app_store();

    let new_item_text = Signal::derive(move || store.home().with(|h| h.new_item_text.clone()));
    let search_query = Signal::derive(move || store.home().with(|h| h.search_query.clone()));
    let total = Signal::derive(move || store.home().with(|h| h.items.len()));
    // Recomputed whenever items or query change
    let filtered = Memo::new(move |_| store.home().with(|h| h.filtered_items()));

    view! {
        <section class="home-screen">
            <ItemInput
                text=new_item_text
                on_text_change=move |text: String| store_set_new_item_text(&store, text)
                on_add=move |_: ()| {
                    store_add_item(&store);
                }
            />
            <SearchInput
                query=search_query
                on_query_change=move |query: String| store_update_query(&store, query)
            />
            <ShoppingList items=filtered total=total />
        </section>
    }
}
