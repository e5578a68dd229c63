//! Item Filtering
//!
//! Case-insensitive substring search over the shopping list.

use crate::models::ShoppingItem;

/// Entries containing `query` (ignoring case), in list order.
/// A blank query returns the whole list.
pub fn filter_items(items: &[ShoppingItem], query: &str) -> Vec<ShoppingItem> {
    if query.trim().is_empty() {
        return items.to_vec();
    }
    let needle = fold_case(query);
    items
        .iter()
        .filter(|item| fold_case(item.as_str()).contains(&needle))
        .cloned()
        .collect()
}

/// Lowercase each char on its own. `str::to_lowercase` maps a word-final
/// `Σ` to `ς`, which would no longer match a `σ` query.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}
