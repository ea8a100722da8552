//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod report;

pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_report_command, ReportArgs};

use std::path::{Path, PathBuf};

use crate::error::ImportError;
use crate::models::Money;
use crate::services::{ImportOutcome, ImportService};
use crate::storage::Session;

/// Value parser for amount arguments such as `--budget 2500` or `--budget R2,500.00`
pub fn parse_money(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}

/// Outcome of importing one file into a session
#[derive(Debug)]
pub struct FileImport {
    pub path: PathBuf,
    pub result: Result<ImportOutcome, ImportError>,
}

impl FileImport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Import files into a session one at a time
///
/// A failed file is recorded and skipped; the remaining files are still
/// imported.
pub fn import_files<P: AsRef<Path>>(session: &mut Session, files: &[P]) -> Vec<FileImport> {
    files
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let result = ImportService::new(session.ledger_mut()).import_file(path);
            FileImport {
                path: path.to_path_buf(),
                result,
            }
        })
        .collect()
}

/// Print per-file outcomes to stderr
pub fn report_imports(imports: &[FileImport]) {
    for import in imports {
        match &import.result {
            Ok(outcome) => eprintln!("{}: {}", import.path.display(), outcome.summary()),
            Err(e) => eprintln!("{}: skipped: {}", import.path.display(), e),
        }
    }
}
