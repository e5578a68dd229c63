//! Settings Screen
//!
//! Placeholder, nothing is configurable at runtime yet.

use leptos::prelude::*;

#[component]
pub fn SettingScreen() -> impl IntoView {
    view! {
        <section class="settings-screen">
            <h2>"Settings"</h2>
            <p class="settings-placeholder">"Belum ada pengaturan."</p>
            <p class="settings-version">{concat!("Versi ", env!("CARGO_PKG_VERSION"))}</p>
        </section>
    }
}
