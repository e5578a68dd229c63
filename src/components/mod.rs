//! UI Components
//!
//! Reusable Leptos components.

mod top_bar;
mod nav_drawer;
mod bottom_nav;
mod item_input;
mod search_input;
mod shopping_list;
mod profile_row;

pub use top_bar::TopBar;
pub use nav_drawer::NavDrawer;
pub use bottom_nav::BottomNav;
pub use item_input::ItemInput;
pub use search_input::SearchInput;
pub use shopping_list::ShoppingList;
pub use profile_row::ProfileRow;
