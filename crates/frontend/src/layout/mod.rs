pub mod global_context;
pub mod header;
pub mod sidebar;

use global_context::DashboardContext;
use header::Header;
use leptos::prelude::*;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content             |
/// +------------------------------------------+
/// ```
///
/// The header and sidebar render for every section; only the content zone
/// switches with the active section.
#[component]
pub fn Shell<S, C>(sidebar: S, content: C) -> impl IntoView
where
    S: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx =
        leptos::context::use_context::<DashboardContext>().expect("DashboardContext not found");
    let is_open = move || ctx.sidebar_open.get();

    view! {
        <div class="app-layout">
            <Header />

            <div class="app-body">
                <aside data-zone="sidebar" class="app-sidebar" class:hidden=move || !is_open()>
                    {sidebar()}
                </aside>

                <main data-zone="content" class="app-main" style="flex: 1; overflow: auto;">
                    {content()}
                </main>
            </div>
        </div>
    }
}
