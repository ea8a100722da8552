//! Transaction display formatting
//!
//! Renders the transaction history as a table for one-shot command output.

use std::fmt::Write;

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Transaction;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Format a date cell; missing dates show as a dash
///
/// A format chrono cannot render falls back to ISO `YYYY-MM-DD`.
pub fn format_date_cell(txn: &Transaction, date_format: &str) -> String {
    let Some(date) = txn.date else {
        return "-".to_string();
    };

    let mut cell = String::new();
    if write!(cell, "{}", date.format(date_format)).is_err() {
        return date.format(FALLBACK_DATE_FORMAT).to_string();
    }
    cell
}

/// Format the transaction history as a table
pub fn format_transaction_table(
    transactions: &[Transaction],
    date_format: &str,
    currency_symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let rows = transactions.iter().enumerate().map(|(i, txn)| TransactionRow {
        index: i + 1,
        date: format_date_cell(txn, date_format),
        category: txn.category.to_string(),
        amount: txn.amount.format_with_symbol(currency_symbol),
        note: truncate(txn.note(), 40),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    let mut output = table.to_string();
    output.push('\n');
    output
}

/// Truncate a string to a maximum number of characters
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
