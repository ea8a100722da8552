//! Transaction model
//!
//! A single ledger row: date, category, amount and an optional note. Two
//! transactions are duplicates exactly when all four fields are equal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date (imported rows may have an unreadable date)
    pub date: Option<NaiveDate>,

    /// Category; `Income` marks inflow, everything else is spending
    pub category: Category,

    /// Amount, by convention a non-negative magnitude
    pub amount: Money,

    /// Free-text note
    #[serde(default)]
    pub note: Option<String>,
}

impl Transaction {
    /// Create a new dated transaction without a note
    pub fn new(date: NaiveDate, category: Category, amount: Money) -> Self {
        Self {
            date: Some(date),
            category,
            amount,
            note: None,
        }
    }

    /// Create a transaction from raw parts, normalizing an empty note to none
    pub fn from_parts(
        date: Option<NaiveDate>,
        category: Category,
        amount: Money,
        note: Option<String>,
    ) -> Self {
        Self {
            date,
            category,
            amount,
            note: note.filter(|n| !n.is_empty()),
        }
    }

    /// Attach a note (an empty string clears it)
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.is_empty() { None } else { Some(note) };
        self
    }

    /// Check if this is an inflow
    pub fn is_income(&self) -> bool {
        self.category.is_income()
    }

    /// Check if this counts toward spending
    pub fn is_expense(&self) -> bool {
        !self.is_income()
    }

    /// The note, or an empty string
    pub fn note(&self) -> &str {
        self.note.as_deref().unwrap_or_default()
    }
}
