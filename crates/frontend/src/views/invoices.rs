//! Invoices section.
//!
//! Receives the owning signal for the bill collection; status changes made
//! here land directly in the shell's canonical copy.

use contracts::domain::{BillRecord, BillStatus};
use leptos::prelude::*;

fn format_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

#[component]
pub fn InvoiceList(bills: RwSignal<Vec<BillRecord>>) -> impl IntoView {
    let mark_paid = move |id: u64| {
        bills.update(|list| {
            if let Some(bill) = list.iter_mut().find(|b| b.id == id) {
                bill.status = BillStatus::Paid;
            }
        });
    };

    view! {
        <div class="page page--invoices">
            <h2 class="page__title">"Invoices"</h2>
            <Show
                when=move || !bills.get().is_empty()
                fallback=|| view! { <p class="page__empty">"No invoices yet."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Customer"</th>
                            <th>"Date"</th>
                            <th>"Amount"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || bills.get()
                            key=|bill| (bill.id, bill.status)
                            children=move |bill: BillRecord| {
                                let id = bill.id;
                                let paid = bill.is_paid();
                                view! {
                                    <tr>
                                        <td>{bill.id}</td>
                                        <td>{bill.customer_name}</td>
                                        <td>{format_date(bill.date)}</td>
                                        <td>{format!("{:.2}", bill.amount)}</td>
                                        <td>
                                            <span class=format!("badge badge--{}", bill.status.as_str())>
                                                {bill.status.as_str()}
                                            </span>
                                        </td>
                                        <td>
                                            {(!paid).then(|| view! {
                                                <button
                                                    class="button button--ghost"
                                                    on:click=move |_| mark_paid(id)
                                                >
                                                    "Mark paid"
                                                </button>
                                            })}
                                        </td>
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 15);
        assert_eq!(format_date(date), "15.03.2026");
        assert_eq!(format_date(None), "—");
    }
}
