//! Header component - application top bar.
//!
//! Contains:
//! - Sidebar toggle
//! - Application title
//! - Logout action

use crate::layout::global_context::DashboardContext;
use crate::shared::icons::icon;
use crate::system::session::do_logout;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<DashboardContext>().expect("DashboardContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_sidebar();
    };

    let logout = move |_| {
        do_logout();
    };

    let is_sidebar_visible = move || ctx.sidebar_open.get();

    view! {
        <header data-zone="header" class="app-header">
            <div class="app-header__brand">
                <button
                    class="app-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="app-header__title">"Billing Admin"</span>
            </div>

            <div class="app-header__actions">
                <div class="app-header__user">
                    {icon("user")}
                    <span>"Administrator"</span>
                </div>

                <button class="app-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </header>
    }
}
