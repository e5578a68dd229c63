//! Profile Screen

use leptos::prelude::*;

use crate::components::ProfileRow;
use crate::config::use_config;

#[component]
pub fn ProfileScreen() -> impl IntoView {
    let profile = use_config().with_value(|c| c.profile.clone());

    view! {
        <section class="profile-screen">
            <img class="profile-image" src=profile.image alt=profile.image_alt />
            <div class="profile-card">
                {profile.fields.into_iter().map(|field| view! {
                    <ProfileRow label=field.label value=field.value />
                }).collect_view()}
            </div>
        </section>
    }
}
