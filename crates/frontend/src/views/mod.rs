pub mod customers;
pub mod invoices;
pub mod overview;
pub mod payments;
pub mod products;
pub mod settings;

use crate::layout::global_context::DashboardContext;
use crate::sections::Section;
use customers::CustomersManagement;
use invoices::InvoiceList;
use leptos::prelude::*;
use overview::DashboardOverview;
use payments::PaymentsReport;
use products::ProductsManagement;
use settings::SettingsView;

/// The section registry: an explicit, compiler-checked mapping from the
/// closed section set to exactly one child view.
///
/// Each child receives only the subset of the shell's state it is entitled
/// to. Views that mutate a collection get the owning `RwSignal` itself, so
/// there is exactly one canonical copy and no way for a child to fork it.
pub fn section_view(section: Section, ctx: DashboardContext) -> AnyView {
    match section {
        Section::Overview => view! {
            <DashboardOverview bills=ctx.bills customers=ctx.customers />
        }
        .into_any(),
        Section::Customers => view! {
            <CustomersManagement customers=ctx.customers />
        }
        .into_any(),
        Section::Products => view! { <ProductsManagement /> }.into_any(),
        Section::Invoices => view! { <InvoiceList bills=ctx.bills /> }.into_any(),
        Section::Payments => view! { <PaymentsReport bills=ctx.bills /> }.into_any(),
        Section::Settings => view! { <SettingsView /> }.into_any(),
    }
}
