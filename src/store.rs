//! Session State Store
//!
//! Uses Leptos reactive_stores. Lives at the app root so screen state
//! outlives the screen's view while its destination is still live.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::filter_items;
use crate::models::{Screen, ShoppingItem};

/// Home screen state: input row, search row and the list itself
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeState {
    pub new_item_text: String,
    pub search_query: String,
    pub items: Vec<ShoppingItem>,
}

impl HomeState {
    /// Apply the typed value of the new item field
    pub fn set_new_item_text(&mut self, text: impl Into<String>) {
        self.new_item_text = text.into();
    }

    /// Append the pending text. Blank input is ignored.
    pub fn add_item(&mut self) -> bool {
        if self.new_item_text.trim().is_empty() {
            return false;
        }
        let text = std::mem::take(&mut self.new_item_text);
        self.items.push(ShoppingItem::new(text));
        true
    }

    pub fn update_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn filtered_items(&self) -> Vec<ShoppingItem> {
        filter_items(&self.items, &self.search_query)
    }
}

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Home destination state
    pub home: HomeState,
    /// Modal drawer visibility
    pub drawer_open: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_new_item_text(store: &AppStore, text: String) {
    store.home().write().set_new_item_text(text);
}

/// Returns whether an item was appended
pub fn store_add_item(store: &AppStore) -> bool {
    let added = store.home().write().add_item();
    if added {
        log::debug!("[HOME] {} items", store.home().with_untracked(|h| h.items.len()));
    }
    added
}

pub fn store_update_query(store: &AppStore, query: String) {
    store.home().write().update_query(query);
}

/// Drop the state owned by a destination that left the back stack
pub fn store_reset_screen(store: &AppStore, screen: Screen) {
    match screen {
        Screen::Home => {
            log::info!("[HOME] state discarded");
            store.home().set(HomeState::default());
        }
        // Static screens own no state
        Screen::Profile | Screen::Setting => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn labels(state: &HomeState) -> Vec<&str> {
        state.items.iter().map(|i| i.as_str()).collect()
    }

    #[test]
    fn test_add_item_appends_and_clears() {
        let mut state = HomeState::default();
        state.set_new_item_text("Milk");
        assert!(state.add_item());
        state.set_new_item_text("Bread");
        assert!(state.add_item());
        assert_eq!(labels(&state), vec!["Milk", "Bread"]);
        assert!(state.new_item_text.is_empty());
    }

    #[test]
    fn test_add_keeps_text_as_typed() {
        let mut state = HomeState::default();
        state.set_new_item_text("  Eggs ");
        assert!(state.add_item());
        assert_eq!(labels(&state), vec!["  Eggs "]);
    }

    #[test]
    fn test_blank_add_is_noop() {
        let mut state = HomeState::default();
        state.set_new_item_text("   \t");
        assert!(!state.add_item());
        assert!(state.items.is_empty());
        // Pending text untouched
        assert_eq!(state.new_item_text, "   \t");
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut state = HomeState::default();
        for _ in 0..2 {
            state.set_new_item_text("Milk");
            state.add_item();
        }
        assert_eq!(labels(&state), vec!["Milk", "Milk"]);
    }

    #[test]
    fn test_filtered_view_follows_query() {
        let mut state = HomeState::default();
        for label in ["Milk", "Bread", "eggs"] {
            state.set_new_item_text(label);
            state.add_item();
        }
        state.update_query("e");
        let filtered: Vec<String> = state.filtered_items().iter().map(|i| i.to_string()).collect();
        assert_eq!(filtered, vec!["Bread", "eggs"]);

        state.update_query("");
        assert_eq!(state.filtered_items(), state.items);
    }

    proptest! {
        #[test]
        fn non_blank_add_appends_last(
            existing in prop::collection::vec("[a-z]{1,6}", 0..8),
            text in "[ ]{0,2}[a-zA-Z0-9]{1,8}[ ]{0,2}",
        ) {
            let mut state = HomeState {
                items: existing.iter().map(|s| ShoppingItem::new(s.clone())).collect(),
                ..HomeState::default()
            };
            let before = state.items.len();
            state.set_new_item_text(text.clone());
            prop_assert!(state.add_item());
            prop_assert_eq!(state.items.len(), before + 1);
            prop_assert_eq!(state.items.last().map(|i| i.as_str()), Some(text.as_str()));
            prop_assert!(state.new_item_text.is_empty());
        }

        #[test]
        fn blank_add_leaves_items(
            existing in prop::collection::vec("[a-z]{1,6}", 0..8),
            text in "[ \t\n]{0,6}",
        ) {
            let items: Vec<ShoppingItem> = existing.iter().map(|s| ShoppingItem::new(s.clone())).collect();
            let mut state = HomeState { items: items.clone(), ..HomeState::default() };
            state.set_new_item_text(text);
            prop_assert!(!state.add_item());
            prop_assert_eq!(state.items, items);
        }
    }
}
