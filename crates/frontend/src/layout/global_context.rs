use crate::sections::Section;
use crate::shared::storage;
use contracts::domain::{BillRecord, CustomerRecord};
use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

/// Shell-owned UI and data state, provided to the whole app via context.
///
/// The context is the single canonical owner of the two hydrated collections;
/// child views mutate them only through the signals handed down by the
/// section registry.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub active: RwSignal<Section>,
    pub sidebar_open: RwSignal<bool>,
    pub bills: RwSignal<Vec<BillRecord>>,
    pub customers: RwSignal<Vec<CustomerRecord>>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::default()),
            sidebar_open: RwSignal::new(true),
            bills: RwSignal::new(vec![]),
            customers: RwSignal::new(vec![]),
        }
    }

    /// Activate a section by identifier. Unrecognized identifiers resolve to
    /// the overview fallback, so any string is acceptable input.
    pub fn select_section(&self, name: &str) {
        let section = Section::from_str(name);
        leptos::logging::log!("select_section: '{}' -> {:?}", name, section);
        self.active.set(section);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    /// Read the persisted collections into the context.
    ///
    /// Runs once per mount, and only on the authorized branch of the session
    /// gate. The context never writes the collections back.
    pub fn hydrate(&self) {
        let bills = storage::read_bills();
        let customers = storage::read_customers();
        log::info!(
            "hydrated {} bill(s), {} customer(s)",
            bills.len(),
            customers.len()
        );
        self.bills.set(bills);
        self.customers.set(customers);
    }

    /// Mirror the active section into the URL (`?section=...`) and restore it
    /// on startup, so a reload lands on the same sub-view.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: std::collections::HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(section) = params.get("section") {
            self.select_section(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if !should_sync_url(active, &current_search) {
                return;
            }

            let query_string = serde_qs::to_string(&std::collections::HashMap::from([(
                "section".to_string(),
                active.as_str().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A fresh load with no query string stays clean until a section is actively
/// selected; once a parameter exists it tracks the active section.
fn should_sync_url(active: Section, current_search: &str) -> bool {
    !(current_search.is_empty() && active == Section::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let ctx = DashboardContext::new();
        assert_eq!(ctx.active.get_untracked(), Section::Overview);
        assert!(ctx.sidebar_open.get_untracked());
        assert!(ctx.bills.get_untracked().is_empty());
        assert!(ctx.customers.get_untracked().is_empty());
    }

    #[test]
    fn test_select_section() {
        let ctx = DashboardContext::new();
        ctx.select_section("payments");
        assert_eq!(ctx.active.get_untracked(), Section::Payments);
        // All sections are reachable from all others.
        ctx.select_section("customers");
        assert_eq!(ctx.active.get_untracked(), Section::Customers);
        ctx.select_section("no-such-section");
        assert_eq!(ctx.active.get_untracked(), Section::Overview);
    }

    #[test]
    fn test_toggle_sidebar() {
        let ctx = DashboardContext::new();
        ctx.toggle_sidebar();
        assert!(!ctx.sidebar_open.get_untracked());
        ctx.toggle_sidebar();
        assert!(ctx.sidebar_open.get_untracked());
    }

    #[test]
    fn test_url_untouched_on_default_section() {
        assert!(!should_sync_url(Section::Overview, ""));
        // An explicit selection writes even on a clean URL.
        assert!(should_sync_url(Section::Payments, ""));
        // An existing parameter keeps tracking, overview included.
        assert!(should_sync_url(Section::Overview, "?section=customers"));
    }

    #[test]
    fn test_collection_setter_reaches_canonical_state() {
        let ctx = DashboardContext::new();
        // The registry hands child views these exact signals, so a write
        // through the "setter" side is a write to the canonical copy.
        let customers_setter = ctx.customers;
        customers_setter.set(vec![CustomerRecord {
            id: 4,
            name: "Lee Ramos".into(),
            ..Default::default()
        }]);
        assert_eq!(ctx.customers.get_untracked().len(), 1);
        assert_eq!(ctx.customers.get_untracked()[0].name, "Lee Ramos");
    }
}
