//! Application Shell - root components of the dashboard.
//!
//! Contains:
//! - `AppShell` - session gate (redirects to the login route or mounts `MainLayout`)
//! - `MainLayout` - the dashboard layout (Shell + Sidebar + active section view)

use crate::layout::global_context::DashboardContext;
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::nav::navigate_to;
use crate::system::session::{use_session, SessionState, LOGIN_PATH};
use crate::views::section_view;
use leptos::prelude::*;

/// Outcome of the session gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Send the visitor to the login route. Hydration must not run.
    Redirect,
    /// Mount the dashboard and hydrate.
    Mount,
}

/// Decide what the shell does for a given session. Pure, so the
/// redirect/no-hydration policy is pinned by native tests.
pub fn gate(session: SessionState) -> GateDecision {
    if session.logged_in() {
        GateDecision::Mount
    } else {
        GateDecision::Redirect
    }
}

/// Main dashboard layout with sidebar and the active section's view.
///
/// Hydrates the persisted collections and initializes router integration for
/// syncing the active section with the URL (?section=...). Both run once when
/// the component is created, strictly after the session gate has passed.
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<DashboardContext>()
        .expect("DashboardContext context not found");

    ctx.hydrate();
    ctx.init_router_integration();

    view! {
        <Shell
            sidebar=|| view! { <Sidebar /> }.into_any()
            content=move || {
                view! {
                    {move || section_view(ctx.active.get(), ctx)}
                }
                .into_any()
            }
        />
    }
}

/// Application shell - session gate component.
///
/// Shows:
/// - a redirect to `LOGIN_PATH` if no session flag is present
/// - `MainLayout` otherwise
///
/// Hydration is deliberately skipped on the redirect branch; nothing should
/// be read for a visitor who is being sent away.
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_session();

    match gate(session) {
        GateDecision::Redirect => {
            log::warn!("no session flag present, redirecting to {}", LOGIN_PATH);
            navigate_to(LOGIN_PATH);
            view! { <div class="app-redirect"></div> }.into_any()
        }
        GateDecision::Mount => view! { <MainLayout /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_redirects_without_session() {
        let session = SessionState::from_flag(None);
        assert_eq!(gate(session), GateDecision::Redirect);
    }

    #[test]
    fn test_gate_mounts_with_session() {
        let session = SessionState::from_flag(Some("true".into()));
        assert_eq!(gate(session), GateDecision::Mount);
    }
}
