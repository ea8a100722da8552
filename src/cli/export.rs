//! CLI command for data export
//!
//! Imports the given files into one session, collapsing duplicates, and
//! writes the normalized comma-delimited CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use super::{import_files, report_imports};
use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::export_transactions_csv;
use crate::storage::Session;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// CSV files to import
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output file path (`-` for stdout, defaults to the configured file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the `export` command
pub fn handle_export_command(args: ExportArgs, settings: &Settings) -> BudgetResult<()> {
    let mut session = Session::new(settings.monthly_budget);
    let imports = import_files(&mut session, &args.files);
    report_imports(&imports);

    if session.ledger().is_empty() {
        return Err(BudgetError::Export("no transactions to export".into()));
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&settings.export_file_name));

    if output.as_os_str() == "-" {
        let stdout = std::io::stdout();
        export_transactions_csv(session.ledger(), stdout.lock())?;
    } else {
        let file = File::create(&output).map_err(|e| {
            BudgetError::Export(format!("Failed to create {}: {}", output.display(), e))
        })?;
        export_transactions_csv(session.ledger(), BufWriter::new(file))?;
        eprintln!(
            "Exported {} transactions to {}",
            session.ledger().len(),
            output.display()
        );
    }

    info!(rows = session.ledger().len(), output = %output.display(), "export written");
    Ok(())
}
