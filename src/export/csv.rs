//! CSV Export functionality
//!
//! Writes the ledger as comma-delimited UTF-8 with the same four columns the
//! importer requires, so an export can always be imported again.

use std::io::Write;

use csv::WriterBuilder;
use tracing::debug;

use crate::error::{BudgetError, BudgetResult, REQUIRED_COLUMNS};
use crate::storage::Ledger;

/// Default file name offered for downloads
pub const EXPORT_FILE_NAME: &str = "transactions.csv";

/// Media type of exported files
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(ledger: &Ledger, writer: W) -> BudgetResult<()> {
    if ledger.is_empty() {
        return Err(BudgetError::Export("no transactions to export".into()));
    }

    let mut csv = WriterBuilder::new().delimiter(b',').from_writer(writer);
    csv.write_record(REQUIRED_COLUMNS)?;

    for txn in ledger {
        let date = txn
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let amount = txn.amount.to_string();
        csv.write_record([date.as_str(), txn.category.name(), amount.as_str(), txn.note()])?;
    }

    csv.flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    debug!(rows = ledger.len(), "transactions exported");
    Ok(())
}

/// Export all transactions into an in-memory buffer
pub fn export_transactions_csv_bytes(ledger: &Ledger) -> BudgetResult<Vec<u8>> {
    let mut buffer = Vec::new();
    export_transactions_csv(ledger, &mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, Transaction};
    use chrono::NaiveDate;

    fn create_test_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.append(
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
                Category::Income,
                Money::from_units(1000),
            )
            .with_note("January, salary"),
        );
        ledger.append(Transaction::from_parts(
            None,
            Category::Unlisted("Pets".into()),
            Money::from_cents(15050),
            None,
        ));
        ledger
    }

    #[test]
    fn test_export_transactions_csv() {
        let ledger = create_test_ledger();
        let output = String::from_utf8(export_transactions_csv_bytes(&ledger).unwrap()).unwrap();

        assert_eq!(
            output,
            "Date,Category,Amount,Note\n\
             2025-01-31,Income,1000.00,\"January, salary\"\n\
             ,Pets,150.50,\n"
        );
    }

    #[test]
    fn test_export_is_deterministic() {
        let ledger = create_test_ledger();
        assert_eq!(
            export_transactions_csv_bytes(&ledger).unwrap(),
            export_transactions_csv_bytes(&ledger).unwrap()
        );
    }

    #[test]
    fn test_empty_ledger_is_not_exported() {
        let err = export_transactions_csv_bytes(&Ledger::new()).unwrap_err();
        assert!(matches!(err, BudgetError::Export(_)));
    }
}
