pub mod bill;
pub mod customer;

pub use bill::{BillRecord, BillStatus};
pub use customer::CustomerRecord;
