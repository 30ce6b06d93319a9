//! Sidebar navigation over the closed section set.

use crate::layout::global_context::DashboardContext;
use crate::sections::Section;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    view! {
        <div class="app-sidebar__content">
            {Section::all().into_iter().map(|section| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.get() == section
                        on:click=move |_| {
                            ctx.select_section(section.as_str());
                        }
                    >
                        <div class="app-sidebar__item-content">
                            {icon(section.icon_name())}
                            <span>{section.label()}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
