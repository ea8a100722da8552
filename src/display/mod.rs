//! Display formatting for terminal output
//!
//! Formats the ledger for one-shot command output.

pub mod transaction;

pub use transaction::{format_date_cell, format_transaction_table, truncate};
