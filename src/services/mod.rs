//! Service layer for Smart Budget
//!
//! Services borrow the session ledger and apply the operations that change
//! it: manual entry and CSV import.

pub mod import;
pub mod transaction;

pub use import::{parse_csv, Delimiter, ImportOutcome, ImportService, ParsedCsv};
pub use transaction::{CreateTransactionInput, TransactionService};
