//! Export module for Smart Budget
//!
//! The ledger is exported as CSV, the same format the importer reads.

pub mod csv;

pub use csv::{
    export_transactions_csv, export_transactions_csv_bytes, EXPORT_FILE_NAME, EXPORT_MIME_TYPE,
};
