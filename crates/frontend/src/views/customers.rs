//! Customers section.
//!
//! Receives the owning signal for the customer collection, so removals here
//! are visible to every other consumer of the shell's state.

use contracts::domain::CustomerRecord;
use leptos::prelude::*;

#[component]
pub fn CustomersManagement(customers: RwSignal<Vec<CustomerRecord>>) -> impl IntoView {
    let remove = move |id: u64| {
        customers.update(|list| list.retain(|c| c.id != id));
    };

    view! {
        <div class="page page--customers">
            <h2 class="page__title">"Customers"</h2>
            <Show
                when=move || !customers.get().is_empty()
                fallback=|| view! { <p class="page__empty">"No customers yet."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Company"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || customers.get()
                            key=|customer| customer.id
                            children=move |customer: CustomerRecord| {
                                let id = customer.id;
                                view! {
                                    <tr>
                                        <td>{customer.name}</td>
                                        <td>{customer.company}</td>
                                        <td>{customer.email}</td>
                                        <td>{customer.phone}</td>
                                        <td>
                                            <button
                                                class="button button--ghost"
                                                on:click=move |_| remove(id)
                                            >
                                                "Remove"
                                            </button>
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
