//! Transaction service
//!
//! Manual entry of transactions. Once the form fields have been read as a
//! date and a number the entry always succeeds; there is no sign or range
//! check.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Category, Money, Transaction};
use crate::storage::Ledger;

/// Service for manual transaction entry
pub struct TransactionService<'a> {
    ledger: &'a mut Ledger,
}

/// Input for creating a new transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTransactionInput {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: Money,
    pub note: Option<String>,
}

impl CreateTransactionInput {
    /// Read raw form fields
    ///
    /// The date must be `YYYY-MM-DD`; the amount accepts anything
    /// [`Money::parse`] does. Only fixed-set categories can be entered.
    pub fn from_form(
        date: &str,
        category: Category,
        amount: &str,
        note: &str,
    ) -> BudgetResult<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
            BudgetError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", date.trim()))
        })?;

        let amount = Money::parse(amount)
            .map_err(|_| BudgetError::Validation(format!("Invalid amount '{}'", amount.trim())))?;

        if !category.is_listed() {
            return Err(BudgetError::Validation(format!(
                "Category '{}' is not one of the fixed categories",
                category
            )));
        }

        let note = note.trim();
        Ok(Self {
            date,
            category,
            amount,
            note: (!note.is_empty()).then(|| note.to_string()),
        })
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Append a manually entered transaction
    pub fn create(&mut self, input: CreateTransactionInput) -> Transaction {
        let txn = Transaction::from_parts(Some(input.date), input.category, input.amount, input.note);
        self.ledger.append(txn.clone());
        info!(
            category = %txn.category,
            amount = %txn.amount,
            "transaction added"
        );
        txn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_appends_to_ledger() {
        let mut ledger = Ledger::new();
        let input = CreateTransactionInput::from_form("2025-03-14", Category::Transport, "42.5", "")
            .unwrap();
        let txn = TransactionService::new(&mut ledger).create(input);

        assert_eq!(txn.amount, Money::from_cents(4250));
        assert_eq!(txn.note, None);
        assert_eq!(ledger.all(), &[txn]);
    }

    #[test]
    fn test_create_keeps_duplicates_and_order() {
        let mut ledger = Ledger::new();
        let input = CreateTransactionInput::from_form("2025-03-14", Category::Food, "10", "x")
            .unwrap();
        let mut service = TransactionService::new(&mut ledger);
        service.create(input.clone());
        service.create(input);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_sign_and_zero_are_not_validated() {
        let negative =
            CreateTransactionInput::from_form("2025-03-14", Category::Income, "-100", "").unwrap();
        assert_eq!(negative.amount, Money::from_units(-100));

        let zero = CreateTransactionInput::from_form("2025-03-14", Category::Rent, "0", "").unwrap();
        assert!(zero.amount.is_zero());
    }

    #[test]
    fn test_unreadable_fields() {
        let err = CreateTransactionInput::from_form("14/03/2025x", Category::Food, "1", "")
            .unwrap_err();
        assert!(err.is_validation());

        let err =
            CreateTransactionInput::from_form("2025-03-14", Category::Food, "abc", "").unwrap_err();
        assert!(err.is_validation());

        let err = CreateTransactionInput::from_form(
            "2025-03-14",
            Category::Unlisted("Pets".into()),
            "1",
            "",
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
