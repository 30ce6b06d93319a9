//! Overview section - summary cards over the hydrated collections.

use contracts::domain::{BillRecord, CustomerRecord};
use leptos::prelude::*;

fn format_money(val: f64) -> String {
    // Round once at cent precision so a fraction like .999 carries into the
    // integer part instead of printing as a three-digit fraction.
    let cents = (val * 100.0).round() as i64;
    let int_part = cents / 100;
    let frac = (cents % 100).abs();
    let mut formatted = format!("{}.{:02}", format_thousands(int_part), frac);
    if cents < 0 && int_part == 0 {
        formatted.insert(0, '-');
    }
    formatted
}

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{move || value.get()}</div>
        </div>
    }
}

#[component]
pub fn DashboardOverview(
    #[prop(into)] bills: Signal<Vec<BillRecord>>,
    #[prop(into)] customers: Signal<Vec<CustomerRecord>>,
) -> impl IntoView {
    let bill_count = Signal::derive(move || bills.get().len().to_string());
    let customer_count = Signal::derive(move || customers.get().len().to_string());
    let total_billed = Signal::derive(move || {
        format_money(bills.get().iter().map(|b| b.amount).sum::<f64>())
    });
    let outstanding = Signal::derive(move || {
        format_money(
            bills
                .get()
                .iter()
                .filter(|b| !b.is_paid())
                .map(|b| b.amount)
                .sum::<f64>(),
        )
    });

    view! {
        <div class="page page--overview">
            <h2 class="page__title">"Overview"</h2>
            <div class="stat-card-row">
                <StatCard label="Bills" value=bill_count />
                <StatCard label="Customers" value=customer_count />
                <StatCard label="Total billed" value=total_billed />
                <StatCard label="Outstanding" value=outstanding />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(249.5), "249.50");
        assert_eq!(format_money(1234567.89), "1\u{00a0}234\u{00a0}567.89");
    }

    #[test]
    fn test_format_money_carries_rounded_cents() {
        assert_eq!(format_money(249.999), "250.00");
        assert_eq!(format_money(1999.999), "2\u{00a0}000.00");
        assert_eq!(format_money(-0.999), "-1.00");
    }

    #[test]
    fn test_format_money_small_negative_keeps_sign() {
        assert_eq!(format_money(-0.5), "-0.50");
    }

    #[test]
    fn test_format_thousands_negative() {
        assert_eq!(format_thousands(-1200), "-1\u{00a0}200");
    }
}
