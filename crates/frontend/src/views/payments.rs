//! Payments section - read-only report over the paid bills.

use contracts::domain::BillRecord;
use leptos::prelude::*;

#[component]
pub fn PaymentsReport(#[prop(into)] bills: Signal<Vec<BillRecord>>) -> impl IntoView {
    let paid = Signal::derive(move || {
        bills
            .get()
            .into_iter()
            .filter(|b| b.is_paid())
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page page--payments">
            <h2 class="page__title">"Payments"</h2>
            <Show
                when=move || !paid.get().is_empty()
                fallback=|| view! { <p class="page__empty">"No payments received."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Customer"</th>
                            <th>"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || paid.get()
                            key=|bill| bill.id
                            children=|bill: BillRecord| {
                                view! {
                                    <tr>
                                        <td>{bill.id}</td>
                                        <td>{bill.customer_name}</td>
                                        <td>{format!("{:.2}", bill.amount)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
