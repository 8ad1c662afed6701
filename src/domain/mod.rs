//! Record model: validated income, expense and generic ledger lines.
//! No I/O happens here.

pub mod common;
pub mod expense;
pub mod income;
pub mod record;

pub use common::{
    normalize_label, validate_amount, validate_name, Amounted, LedgerRecord, NamedEntity,
    RecordMapping, MAX_NAME_LEN,
};
pub use expense::Expense;
pub use income::Income;
pub use record::{BaseRecord, Record};
