use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payment status of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Paid => "paid",
            BillStatus::Overdue => "overdue",
        }
    }
}

/// One billing record as persisted by the admin app.
///
/// The persisted format is a JSON array under the `bills` storage key.
/// Records written by older versions may carry only an `id`, so every other
/// field decodes through its default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    #[serde(default)]
    pub id: u64,

    #[serde(default)]
    pub customer_name: String,

    #[serde(default)]
    pub amount: f64,

    #[serde(default)]
    pub status: BillStatus,

    /// Issue date; older records omit it.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl BillRecord {
    pub fn is_paid(&self) -> bool {
        self.status == BillStatus::Paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal_record() {
        let bills: Vec<BillRecord> = serde_json::from_str(r#"[{"id":1}]"#).unwrap();
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].id, 1);
        assert_eq!(bills[0].status, BillStatus::Pending);
        assert_eq!(bills[0].amount, 0.0);
        assert!(bills[0].date.is_none());
    }

    #[test]
    fn test_decode_full_record() {
        let raw = r#"{"id":7,"customerName":"Acme LLC","amount":249.5,"status":"paid","date":"2026-03-15"}"#;
        let bill: BillRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(bill.customer_name, "Acme LLC");
        assert!(bill.is_paid());
        assert_eq!(bill.date.unwrap().to_string(), "2026-03-15");
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [BillStatus::Pending, BillStatus::Paid, BillStatus::Overdue] {
            let encoded = serde_json::to_string(&status).unwrap();
            assert_eq!(encoded, format!("\"{}\"", status.as_str()));
            let decoded: BillStatus = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, status);
        }
    }
}
