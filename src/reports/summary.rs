//! Ledger Summary
//!
//! Totals, balance and per-category expense breakdown for the whole ledger,
//! computed in exact cents.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Category, Money};
use crate::storage::Ledger;

use super::suggestions::{suggest, Suggestion, SuggestionKind};

const BAR_WIDTH: usize = 30;

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    pub transaction_count: usize,
}

/// Aggregated view of a ledger against a monthly budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    /// Sum of `Income` amounts
    pub total_income: Money,
    /// Sum of every other amount, unlisted categories included
    pub total_expenses: Money,
    /// Income minus expenses when there is income, otherwise budget minus
    /// expenses
    pub balance: Money,
    /// Budget the summary was computed against
    pub monthly_budget: Money,
    /// Number of transactions summarized
    pub transaction_count: usize,
    /// Expense totals by category, ordered by category name
    pub category_totals: Vec<CategoryTotal>,
}

impl LedgerSummary {
    /// Aggregate a ledger
    pub fn generate(ledger: &Ledger, monthly_budget: Money) -> Self {
        let mut total_income = Money::zero();
        let mut total_expenses = Money::zero();
        let mut by_category: BTreeMap<String, CategoryTotal> = BTreeMap::new();

        for txn in ledger {
            if txn.is_income() {
                total_income += txn.amount;
                continue;
            }

            total_expenses += txn.amount;
            let row = by_category
                .entry(txn.category.name().to_string())
                .or_insert_with(|| CategoryTotal {
                    category: txn.category.clone(),
                    total: Money::zero(),
                    transaction_count: 0,
                });
            row.total += txn.amount;
            row.transaction_count += 1;
        }

        let balance = if total_income.is_positive() {
            total_income - total_expenses
        } else {
            monthly_budget - total_expenses
        };

        Self {
            total_income,
            total_expenses,
            balance,
            monthly_budget,
            transaction_count: ledger.len(),
            category_totals: by_category.into_values().collect(),
        }
    }

    /// Check if there was nothing to summarize
    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }

    /// Total for a single category, if it has expenses
    pub fn category_total(&self, category: &Category) -> Option<Money> {
        self.category_totals
            .iter()
            .find(|row| &row.category == category)
            .map(|row| row.total)
    }

    /// Run the suggestion rules against this summary
    pub fn suggestions(&self) -> Vec<Suggestion> {
        suggest(
            self.total_expenses,
            self.total_income,
            self.monthly_budget,
            &self.category_totals,
        )
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Summary\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No transactions yet.\n");
            return output;
        }

        let money = |m: Money| m.format_with_symbol(currency_symbol);
        output.push_str(&format!("{:<20} {:>20}\n", "Total Expenses:", money(self.total_expenses)));
        output.push_str(&format!("{:<20} {:>20}\n", "Total Income:", money(self.total_income)));
        output.push_str(&format!("{:<20} {:>20}\n", "Balance:", money(self.balance)));
        output.push_str(&format!("{:<20} {:>20}\n", "Monthly Budget:", money(self.monthly_budget)));

        output.push_str("\nSpending by Category\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        let largest = self
            .category_totals
            .iter()
            .map(|row| row.total.cents())
            .max()
            .unwrap_or(0);
        for row in &self.category_totals {
            output.push_str(&format!(
                "{:<15} {:>15} {}\n",
                row.category.name(),
                money(row.total),
                bar(row.total.cents(), largest)
            ));
        }

        output.push_str("\nSuggestions\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for suggestion in self.suggestions() {
            let marker = match suggestion.kind() {
                SuggestionKind::Warning => "!",
                SuggestionKind::Positive => "+",
                SuggestionKind::Tip => "*",
            };
            output.push_str(&format!("[{}] {}\n", marker, suggestion.message()));
        }

        output
    }
}

/// Text bar scaled against the largest total; non-positive totals draw nothing
fn bar(value: i64, largest: i64) -> String {
    if value <= 0 || largest <= 0 {
        return String::new();
    }
    let width = (i128::from(value) * BAR_WIDTH as i128 / i128::from(largest)) as usize;
    "#".repeat(width.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use chrono::NaiveDate;

    fn create_test_ledger(rows: &[(Category, i64)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (day, (category, units)) in rows.iter().enumerate() {
            ledger.append(Transaction::new(
                NaiveDate::from_ymd_opt(2025, 2, day as u32 + 1).unwrap(),
                category.clone(),
                Money::from_units(*units),
            ));
        }
        ledger
    }

    #[test]
    fn test_huge_amounts_saturate_instead_of_panicking() {
        let ledger = create_test_ledger(&[
            (Category::Food, 90_000_000_000_000_000),
            (Category::Food, 90_000_000_000_000_000),
        ]);
        let summary = LedgerSummary::generate(&ledger, Money::from_units(500));

        assert_eq!(summary.total_expenses.cents(), i64::MAX);
        assert_eq!(summary.category_total(&Category::Food).unwrap().cents(), i64::MAX);
        assert!(summary.balance.is_negative());
        assert!(summary.format_terminal("R").contains("Food"));
    }

    #[test]
    fn test_totals_with_income() {
        let ledger = create_test_ledger(&[
            (Category::Income, 1000),
            (Category::Food, 200),
            (Category::Transport, 100),
        ]);
        let summary = LedgerSummary::generate(&ledger, Money::from_units(5000));

        assert_eq!(summary.total_expenses, Money::from_units(300));
        assert_eq!(summary.total_income, Money::from_units(1000));
        assert_eq!(summary.balance, Money::from_units(700));
    }

    #[test]
    fn test_balance_uses_budget_without_income() {
        let ledger = create_test_ledger(&[(Category::Rent, 400)]);
        let summary = LedgerSummary::generate(&ledger, Money::from_units(1000));
        assert_eq!(summary.balance, Money::from_units(600));
    }

    #[test]
    fn test_category_totals_sorted_by_name() {
        let ledger = create_test_ledger(&[
            (Category::Utilities, 50),
            (Category::Food, 20),
            (Category::Unlisted("Pets".into()), 70),
            (Category::Food, 30),
            (Category::Income, 900),
        ]);
        let summary = LedgerSummary::generate(&ledger, Money::zero());

        let names: Vec<_> = summary
            .category_totals
            .iter()
            .map(|row| row.category.name())
            .collect();
        assert_eq!(names, ["Food", "Pets", "Utilities"]);
        assert_eq!(summary.category_total(&Category::Food), Some(Money::from_units(50)));
        assert_eq!(summary.category_total(&Category::Income), None);
        assert_eq!(summary.total_expenses, Money::from_units(170));
    }

    #[test]
    fn test_exact_cents() {
        let mut ledger = Ledger::new();
        for _ in 0..3 {
            ledger.append(Transaction::from_parts(
                None,
                Category::Other,
                Money::from_cents(10),
                None,
            ));
        }
        ledger.append(Transaction::from_parts(
            None,
            Category::Other,
            Money::from_cents(20),
            Some("x".into()),
        ));
        let summary = LedgerSummary::generate(&ledger, Money::zero());
        assert_eq!(summary.total_expenses, Money::from_cents(50));
    }

    #[test]
    fn test_summary_suggestions() {
        let ledger = create_test_ledger(&[(Category::Food, 150), (Category::Rent, 250)]);
        let summary = LedgerSummary::generate(&ledger, Money::from_units(1000));
        assert_eq!(
            summary.suggestions(),
            vec![Suggestion::WithinBudget, Suggestion::HighFoodSpending]
        );
    }

    #[test]
    fn test_format_terminal() {
        let ledger = create_test_ledger(&[(Category::Income, 2000), (Category::Food, 1234)]);
        let output = LedgerSummary::generate(&ledger, Money::from_units(1000))
            .format_terminal("R");

        assert!(output.contains("R 1,234.00"));
        assert!(output.contains(&"#".repeat(BAR_WIDTH)));
        assert!(output.contains("You are over budget."));
    }

    #[test]
    fn test_format_terminal_empty() {
        let output = LedgerSummary::generate(&Ledger::new(), Money::zero()).format_terminal("R");
        assert!(output.contains("No transactions yet."));
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(50, 100).len(), BAR_WIDTH / 2);
        assert_eq!(bar(1, 1_000_000).len(), 1);
        assert!(bar(-5, 100).is_empty());
    }
}
