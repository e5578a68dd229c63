//! Profile Row Component

use leptos::prelude::*;

/// One `label : value` line of the profile card
#[component]
pub fn ProfileRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="profile-row">
            <span class="profile-label">{label}</span>
            <span class="profile-sep">":"</span>
            <span class="profile-value">{value}</span>
        </div>
    }
}
