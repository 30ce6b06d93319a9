use crate::app_shell::AppShell;
use crate::layout::global_context::DashboardContext;
use crate::system::session::SessionState;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Resolve the session once at the root and inject it, so the shell below
    // is a function of its inputs rather than of ambient storage.
    provide_context(SessionState::load());

    // Provide the DashboardContext store to the whole app via context.
    provide_context(DashboardContext::new());

    view! {
        <AppShell />
    }
}
