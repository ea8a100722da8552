//! CLI command for the one-shot report
//!
//! Imports the given files into a fresh session and prints the transaction
//! history, totals, category breakdown and suggestions.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use super::{import_files, parse_money, report_imports, FileImport};
use crate::config::Settings;
use crate::display::format_transaction_table;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Transaction};
use crate::reports::{LedgerSummary, SuggestionKind};
use crate::services::ImportOutcome;
use crate::storage::Session;

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// CSV files to import
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Monthly budget (defaults to the configured budget)
    #[arg(short, long, value_parser = parse_money)]
    pub budget: Option<Money>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct JsonSuggestion {
    kind: SuggestionKind,
    message: &'static str,
}

#[derive(Serialize)]
struct JsonImport {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<ImportOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    imports: Vec<JsonImport>,
    transactions: &'a [Transaction],
    summary: &'a LedgerSummary,
    suggestions: Vec<JsonSuggestion>,
}

/// Handle the `report` command
pub fn handle_report_command(args: ReportArgs, settings: &Settings) -> BudgetResult<()> {
    let mut session = Session::new(args.budget.unwrap_or(settings.monthly_budget));
    let imports = import_files(&mut session, &args.files);

    if imports.iter().all(|i| !i.is_ok()) {
        report_imports(&imports);
        return Err(BudgetError::Validation(
            "none of the given files could be imported".into(),
        ));
    }

    let summary = session.summary();
    if args.json {
        let report = JsonReport {
            imports: imports.iter().map(json_import).collect(),
            transactions: session.ledger().all(),
            summary: &summary,
            suggestions: summary
                .suggestions()
                .into_iter()
                .map(|s| JsonSuggestion {
                    kind: s.kind(),
                    message: s.message(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report_imports(&imports);
        print!(
            "{}",
            format_transaction_table(
                session.ledger().all(),
                &settings.date_format,
                &settings.currency_symbol
            )
        );
        println!();
        print!("{}", summary.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}

fn json_import(import: &FileImport) -> JsonImport {
    let (outcome, error) = match &import.result {
        Ok(outcome) => (Some(outcome.clone()), None),
        Err(e) => (None, Some(e.to_string())),
    };
    JsonImport {
        path: import.path.display().to_string(),
        outcome,
        error,
    }
}
