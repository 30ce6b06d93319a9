use serde::{Deserialize, Serialize};

/// One customer record as persisted by the admin app.
///
/// Persisted as a JSON array under the `customers` storage key, with the
/// same tolerant decoding rules as [`crate::domain::BillRecord`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    #[serde(default)]
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub company: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_array() {
        let customers: Vec<CustomerRecord> = serde_json::from_str("[]").unwrap();
        assert!(customers.is_empty());
    }

    #[test]
    fn test_decode_partial_record() {
        let raw = r#"[{"id":3,"name":"Dana Webb","email":"dana@example.com"}]"#;
        let customers: Vec<CustomerRecord> = serde_json::from_str(raw).unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].name, "Dana Webb");
        assert_eq!(customers[0].company, "");
    }
}
