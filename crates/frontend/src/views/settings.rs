//! Settings section.

use leptos::prelude::*;

#[component]
pub fn SettingsView() -> impl IntoView {
    view! {
        <div class="page page--settings">
            <h2 class="page__title">"Settings"</h2>
            <p class="page__empty">"Workspace preferences."</p>
        </div>
    }
}
