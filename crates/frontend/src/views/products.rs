//! Products section.
//!
//! Product data lives in its own flow, outside the shell's two hydrated
//! collections, so this view takes no shell state.

use leptos::prelude::*;

#[component]
pub fn ProductsManagement() -> impl IntoView {
    view! {
        <div class="page page--products">
            <h2 class="page__title">"Products"</h2>
            <p class="page__empty">"Product catalog management."</p>
        </div>
    }
}
