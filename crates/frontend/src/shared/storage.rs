//! Read-only hydration of the persisted collections.
//!
//! The shell reads `bills` and `customers` once at mount and never writes
//! them back; the child views own all mutation flows. Both a missing key and
//! a malformed payload decode to an empty collection, so stale or corrupted
//! storage can never keep the dashboard from mounting.

use contracts::domain::{BillRecord, CustomerRecord};
use serde::de::DeserializeOwned;
use web_sys::window;

const BILLS_KEY: &str = "bills";
const CUSTOMERS_KEY: &str = "customers";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Decode a persisted JSON array, defaulting to empty on absence or damage.
fn parse_records<T: DeserializeOwned>(key: &str, raw: Option<String>) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(err) => {
            log::warn!("discarding malformed '{}' payload: {}", key, err);
            Vec::new()
        }
    }
}

/// Read the bill collection from localStorage.
pub fn read_bills() -> Vec<BillRecord> {
    parse_records(BILLS_KEY, read_item(BILLS_KEY))
}

/// Read the customer collection from localStorage.
pub fn read_customers() -> Vec<CustomerRecord> {
    parse_records(CUSTOMERS_KEY, read_item(CUSTOMERS_KEY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_yields_empty() {
        let bills: Vec<BillRecord> = parse_records(BILLS_KEY, None);
        assert!(bills.is_empty());
    }

    #[test]
    fn test_valid_payloads() {
        let bills: Vec<BillRecord> =
            parse_records(BILLS_KEY, Some(r#"[{"id":1}]"#.to_string()));
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].id, 1);

        let customers: Vec<CustomerRecord> =
            parse_records(CUSTOMERS_KEY, Some("[]".to_string()));
        assert!(customers.is_empty());
    }

    #[test]
    fn test_malformed_payload_yields_empty() {
        let bills: Vec<BillRecord> =
            parse_records(BILLS_KEY, Some("not json".to_string()));
        assert!(bills.is_empty());

        // A well-formed value of the wrong shape is malformed too.
        let customers: Vec<CustomerRecord> =
            parse_records(CUSTOMERS_KEY, Some(r#"{"id":1}"#.to_string()));
        assert!(customers.is_empty());
    }
}
