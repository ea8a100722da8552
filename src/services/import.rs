//! CSV Import service
//!
//! Reads delimited text into transactions. Semicolon is tried first, then
//! comma. The header must carry `Date`, `Category`, `Amount` and `Note`; any
//! failure rejects the whole file and leaves the ledger untouched.

use std::fmt;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{ImportError, REQUIRED_COLUMNS};
use crate::models::{Category, Money, Transaction};
use crate::storage::Ledger;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// Two-digit years go first; `%Y` would also accept "24" as year 24.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%y", "%m/%d/%Y", "%d.%m.%Y"];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Field delimiter an import was read with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Semicolon,
    Comma,
}

impl Delimiter {
    /// Attempt order for imports
    pub const ATTEMPTS: [Delimiter; 2] = [Delimiter::Semicolon, Delimiter::Comma];

    pub fn as_byte(self) -> u8 {
        match self {
            Self::Semicolon => b';',
            Self::Comma => b',',
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.as_byte() as char)
    }
}

/// Rows parsed from one CSV document, not yet in any ledger
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    /// Delimiter that read the document
    pub delimiter: Delimiter,
    /// Parsed rows in file order
    pub transactions: Vec<Transaction>,
    /// Source line of each parsed row
    pub rows: Vec<usize>,
}

impl ParsedCsv {
    /// Rows whose date could not be read
    pub fn missing_dates(&self) -> usize {
        self.transactions.iter().filter(|t| t.date.is_none()).count()
    }

    /// Rows whose category is outside the fixed set
    pub fn unlisted_categories(&self) -> usize {
        self.transactions
            .iter()
            .filter(|t| !t.category.is_listed())
            .count()
    }
}

/// Result of an accepted import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    /// Data rows read from the file
    pub rows_read: usize,
    /// Net growth of the ledger
    pub rows_added: usize,
    /// Rows removed by duplicate collapse
    pub duplicates_removed: usize,
    /// Delimiter that read the file
    pub delimiter: Delimiter,
    /// Rows kept with a missing date
    pub missing_dates: usize,
    /// Rows kept with a category outside the fixed set
    pub unlisted_categories: usize,
}

impl ImportOutcome {
    /// One-line summary for status bars and command output
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Imported {} of {} rows ({} delimiter)",
            self.rows_added, self.rows_read, self.delimiter
        );
        if self.duplicates_removed > 0 {
            text.push_str(&format!(", {} duplicates removed", self.duplicates_removed));
        }
        if self.missing_dates > 0 {
            text.push_str(&format!(", {} without a date", self.missing_dates));
        }
        if self.unlisted_categories > 0 {
            text.push_str(&format!(
                ", {} with an unlisted category",
                self.unlisted_categories
            ));
        }
        text
    }
}

/// Service for CSV import
pub struct ImportService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Import a CSV document held in memory
    pub fn import_bytes(&mut self, bytes: &[u8]) -> Result<ImportOutcome, ImportError> {
        let parsed = match parse_csv(bytes) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "import rejected");
                return Err(e);
            }
        };
        if let Err(e) = check_total_range(self.ledger, &parsed) {
            warn!(error = %e, "import rejected");
            return Err(e);
        }

        let rows_read = parsed.transactions.len();
        let missing_dates = parsed.missing_dates();
        let unlisted_categories = parsed.unlisted_categories();
        let delimiter = parsed.delimiter;

        let before = self.ledger.len();
        let duplicates_removed = self.ledger.append_all(parsed.transactions);
        let rows_added = self.ledger.len() - before;

        let outcome = ImportOutcome {
            rows_read,
            rows_added,
            duplicates_removed,
            delimiter,
            missing_dates,
            unlisted_categories,
        };
        info!(
            rows_read,
            rows_added,
            duplicates_removed,
            %delimiter,
            "import accepted"
        );
        Ok(outcome)
    }

    /// Read a file fully, then import it
    pub fn import_file(&mut self, path: &Path) -> Result<ImportOutcome, ImportError> {
        let bytes = std::fs::read(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "import file unreadable");
            ImportError::File {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        debug!(path = %path.display(), size = bytes.len(), "import file read");
        self.import_bytes(&bytes)
    }
}

/// Parse a CSV document without touching any ledger
pub fn parse_csv(bytes: &[u8]) -> Result<ParsedCsv, ImportError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut last_error = String::new();
    for delimiter in Delimiter::ATTEMPTS {
        let last_resort = delimiter == Delimiter::Comma;
        match read_table(bytes, delimiter) {
            Ok((headers, _)) if headers.len() <= 1 && !last_resort => {
                debug!(%delimiter, "header not split, trying next delimiter");
                last_error = format!("header has a single column with {} delimiter", delimiter);
            }
            Ok((headers, records)) => {
                let (rows, transactions) = rows_to_transactions(&headers, &records)?
                    .into_iter()
                    .unzip();
                return Ok(ParsedCsv {
                    delimiter,
                    transactions,
                    rows,
                });
            }
            Err(e) => {
                debug!(%delimiter, error = %e, "delimiter attempt failed");
                last_error = e.to_string();
            }
        }
    }

    Err(ImportError::Unreadable(last_error))
}

fn read_table(
    bytes: &[u8],
    delimiter: Delimiter,
) -> Result<(StringRecord, Vec<StringRecord>), csv::Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    Ok((headers, records))
}

struct ColumnIndex {
    date: usize,
    category: usize,
    amount: usize,
    note: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord) -> Result<Self, ImportError> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(**name).is_none())
            .map(|name| name.to_string())
            .collect();

        match (
            position("Date"),
            position("Category"),
            position("Amount"),
            position("Note"),
        ) {
            (Some(date), Some(category), Some(amount), Some(note)) => Ok(Self {
                date,
                category,
                amount,
                note,
            }),
            _ => Err(ImportError::MissingColumns { missing }),
        }
    }
}

/// Summed magnitudes of ledger and import must stay within i64 cents so
/// totals never saturate.
fn check_total_range(ledger: &Ledger, parsed: &ParsedCsv) -> Result<(), ImportError> {
    let magnitude = |txn: &Transaction| i128::from(txn.amount.cents().unsigned_abs());
    let mut total: i128 = ledger.iter().map(magnitude).sum();

    for (txn, row) in parsed.transactions.iter().zip(&parsed.rows) {
        total += magnitude(txn);
        if total > i128::from(i64::MAX) {
            return Err(ImportError::AmountOutOfRange {
                row: *row,
                value: txn.amount.to_string(),
            });
        }
    }
    Ok(())
}

fn rows_to_transactions(
    headers: &StringRecord,
    records: &[StringRecord],
) -> Result<Vec<(usize, Transaction)>, ImportError> {
    let columns = ColumnIndex::locate(headers)?;

    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let field = |col: usize| record.get(col).unwrap_or_default();

            let row = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(idx + 2);
            let amount = parse_amount(field(columns.amount)).ok_or_else(|| {
                ImportError::InvalidAmount {
                    row,
                    value: field(columns.amount).to_string(),
                }
            })?;

            let note = field(columns.note);
            let txn = Transaction::from_parts(
                parse_date(field(columns.date)),
                Category::parse(field(columns.category)),
                amount,
                Some(note.to_string()),
            );
            Ok((row, txn))
        })
        .collect()
}

/// Read an imported date cell; anything unreadable is a missing date
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
                .map(|dt| dt.date())
        })
}

/// Read an imported amount cell; an empty cell counts as zero
fn parse_amount(s: &str) -> Option<Money> {
    let s = s.trim();
    if s.is_empty() {
        return Some(Money::zero());
    }
    Money::parse(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::csv::export_transactions_csv_bytes;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn import(ledger: &mut Ledger, text: &str) -> Result<ImportOutcome, ImportError> {
        ImportService::new(ledger).import_bytes(text.as_bytes())
    }

    #[test]
    fn test_semicolon_file() {
        let mut ledger = Ledger::new();
        let outcome = import(
            &mut ledger,
            "Date;Category;Amount;Note\n2024-01-05;Food;120.50;groceries, weekly\n",
        )
        .unwrap();

        assert_eq!(outcome.delimiter, Delimiter::Semicolon);
        assert_eq!(outcome.rows_added, 1);
        let txn = &ledger.all()[0];
        assert_eq!(txn.date, Some(date(2024, 1, 5)));
        assert_eq!(txn.category, Category::Food);
        assert_eq!(txn.amount, Money::from_cents(12050));
        assert_eq!(txn.note(), "groceries, weekly");
    }

    #[test]
    fn test_comma_fallback() {
        let mut ledger = Ledger::new();
        let outcome = import(
            &mut ledger,
            "Date,Category,Amount,Note\n2024-02-01,Income,1000,salary\n2024-02-02,Rent,400,\n",
        )
        .unwrap();

        assert_eq!(outcome.delimiter, Delimiter::Comma);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.all()[1].note, None);
    }

    #[test]
    fn test_missing_column_rejects_whole_file() {
        let mut ledger = Ledger::new();
        import(&mut ledger, "Date,Category,Amount,Note\n2024-01-01,Food,10,\n").unwrap();

        let err = import(&mut ledger, "Date,Category,Note\n2024-01-02,Food,lunch\n").unwrap_err();
        assert_eq!(
            err,
            ImportError::MissingColumns {
                missing: vec!["Amount".into()]
            }
        );
        assert!(err.to_string().contains("Date, Category, Amount, Note"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_headers_are_case_sensitive() {
        let mut ledger = Ledger::new();
        let err = import(&mut ledger, "date,category,amount,note\n").unwrap_err();
        match err {
            ImportError::MissingColumns { missing } => assert_eq!(missing.len(), 4),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extra_columns_and_bom() {
        let mut ledger = Ledger::new();
        let text = "\u{feff}Id;Date;Category;Amount;Note\n7;2024-03-01;Transport;35;bus\n";
        import(&mut ledger, text).unwrap();
        assert_eq!(ledger.all()[0].category, Category::Transport);
    }

    #[test]
    fn test_bad_date_becomes_missing() {
        let mut ledger = Ledger::new();
        let outcome = import(
            &mut ledger,
            "Date,Category,Amount,Note\nyesterday,Food,12,\n,Food,13,\n03/15/2024,Food,14,\n",
        )
        .unwrap();

        assert_eq!(outcome.missing_dates, 2);
        assert_eq!(ledger.all()[0].date, None);
        assert_eq!(ledger.all()[2].date, Some(date(2024, 3, 15)));
    }

    #[test]
    fn test_unlisted_category_kept_verbatim() {
        let mut ledger = Ledger::new();
        let outcome = import(&mut ledger, "Date,Category,Amount,Note\n2024-01-01,Pets,80,vet\n")
            .unwrap();
        assert_eq!(outcome.unlisted_categories, 1);
        assert_eq!(ledger.all()[0].category, Category::Unlisted("Pets".into()));
    }

    #[test]
    fn test_negative_and_zero_amounts_accepted() {
        let mut ledger = Ledger::new();
        import(
            &mut ledger,
            "Date,Category,Amount,Note\n2024-01-01,Food,-5,refund\n2024-01-02,Food,0,\n",
        )
        .unwrap();
        assert_eq!(ledger.all()[0].amount, Money::from_units(-5));
        assert!(ledger.all()[1].amount.is_zero());
    }

    #[test]
    fn test_invalid_amount_rejects_whole_file() {
        let mut ledger = Ledger::new();
        let err = import(
            &mut ledger,
            "Date,Category,Amount,Note\n2024-01-01,Food,10,\n2024-01-02,Food,ten,\n",
        )
        .unwrap_err();

        assert_eq!(
            err,
            ImportError::InvalidAmount {
                row: 3,
                value: "ten".into()
            }
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_extra_decimals_round_instead_of_rejecting() {
        let mut ledger = Ledger::new();
        let outcome = import(
            &mut ledger,
            "Date,Category,Amount,Note\n2025-01-01,Food,10.555,x\n2025-01-02,Rent,400,y\n",
        )
        .unwrap();

        assert_eq!(outcome.rows_added, 2);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.all()[0].amount, Money::from_cents(1056));
        assert_eq!(ledger.all()[1].amount, Money::from_units(400));
    }

    #[test]
    fn test_total_out_of_range_rejects_whole_file() {
        let mut ledger = Ledger::new();
        let err = import(
            &mut ledger,
            "Date,Category,Amount,Note\n2025-01-01,Food,90000000000000000,\n2025-01-02,Food,90000000000000000,\n",
        )
        .unwrap_err();

        assert!(matches!(err, ImportError::AmountOutOfRange { row: 3, .. }));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_total_out_of_range_counts_existing_ledger() {
        let mut ledger = Ledger::new();
        import(
            &mut ledger,
            "Date,Category,Amount,Note\n2025-01-01,Income,-90000000000000000,\n",
        )
        .unwrap();

        let err = import(
            &mut ledger,
            "Date,Category,Amount,Note\n2025-01-02,Food,90000000000000000,\n",
        )
        .unwrap_err();
        assert!(matches!(err, ImportError::AmountOutOfRange { row: 2, .. }));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_ragged_rows_unreadable() {
        let mut ledger = Ledger::new();
        let err = import(&mut ledger, "Date,Category,Amount,Note\n2024-01-01,Food\n").unwrap_err();
        assert!(matches!(err, ImportError::Unreadable(_)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_invalid_utf8_unreadable() {
        let mut ledger = Ledger::new();
        let mut bytes = b"Date,Category,Amount,Note\n2024-01-01,Food,1,".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let err = ImportService::new(&mut ledger).import_bytes(&bytes).unwrap_err();
        assert!(matches!(err, ImportError::Unreadable(_)));
    }

    #[test]
    fn test_empty_input_reports_missing_columns() {
        let mut ledger = Ledger::new();
        let err = import(&mut ledger, "").unwrap_err();
        assert!(matches!(err, ImportError::MissingColumns { .. }));
    }

    #[test]
    fn test_duplicates_collapsed_against_ledger() {
        let text = "Date,Category,Amount,Note\n2024-01-01,Food,10,a\n2024-01-01,Food,10,a\n";
        let mut ledger = Ledger::new();

        let first = import(&mut ledger, text).unwrap();
        assert_eq!(first.rows_read, 2);
        assert_eq!(first.rows_added, 1);
        assert_eq!(first.duplicates_removed, 1);

        let second = import(&mut ledger, text).unwrap();
        assert_eq!(second.rows_added, 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let mut source = Ledger::new();
        source.append(
            Transaction::new(date(2024, 4, 1), Category::Income, Money::from_units(1000))
                .with_note("pay; April"),
        );
        source.append(Transaction::new(
            date(2024, 4, 2),
            Category::Food,
            Money::from_cents(19999),
        ));
        let bytes = export_transactions_csv_bytes(&source).unwrap();

        let mut target = Ledger::new();
        ImportService::new(&mut target).import_bytes(&bytes).unwrap();
        assert_eq!(target.all(), source.all());

        ImportService::new(&mut target).import_bytes(&bytes).unwrap();
        assert_eq!(target.all(), source.all());
    }

    #[test]
    fn test_import_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Date;Category;Amount;Note").unwrap();
        writeln!(file, "2024-05-01;Utilities;250,00;power").unwrap();

        let mut ledger = Ledger::new();
        ImportService::new(&mut ledger)
            .import_file(file.path())
            .unwrap();
        assert_eq!(ledger.all()[0].amount, Money::from_units(250));
    }

    #[test]
    fn test_import_missing_file() {
        let mut ledger = Ledger::new();
        let err = ImportService::new(&mut ledger)
            .import_file(Path::new("/nonexistent/budget.csv"))
            .unwrap_err();
        assert!(matches!(err, ImportError::File { .. }));
    }

    #[test]
    fn test_parse_date_layouts() {
        assert_eq!(parse_date("2024/06/30"), Some(date(2024, 6, 30)));
        assert_eq!(parse_date("06/30/24"), Some(date(2024, 6, 30)));
        assert_eq!(parse_date("30.06.2024"), Some(date(2024, 6, 30)));
        assert_eq!(parse_date("2024-06-30 08:15:00"), Some(date(2024, 6, 30)));
        assert_eq!(parse_date("2024-06-30T08:15:00"), Some(date(2024, 6, 30)));
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn test_outcome_summary() {
        let outcome = ImportOutcome {
            rows_read: 3,
            rows_added: 2,
            duplicates_removed: 1,
            delimiter: Delimiter::Comma,
            missing_dates: 0,
            unlisted_categories: 1,
        };
        assert_eq!(
            outcome.summary(),
            "Imported 2 of 3 rows (',' delimiter), 1 duplicates removed, 1 with an unlisted category"
        );
    }
}
