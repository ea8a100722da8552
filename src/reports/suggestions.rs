//! Spending suggestions
//!
//! Fixed threshold rules evaluated against one summary snapshot. Rules fire
//! independently, in a fixed order; the budget rule always yields exactly one
//! suggestion.

use serde::Serialize;
use std::fmt;

use crate::models::{Category, Money};

use super::summary::CategoryTotal;

/// Expenses above this share of the budget are close to the limit
pub const NEAR_LIMIT_PERCENT: i64 = 80;

/// Expenses below this share of income count as saving well
pub const SAVING_PERCENT: i64 = 70;

/// Food above this share of expenses is flagged
pub const FOOD_SHARE_PERCENT: i64 = 30;

/// How a suggestion should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Warning,
    Positive,
    Tip,
}

/// A piece of budgeting advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    OverBudget,
    NearBudgetLimit,
    WithinBudget,
    SavingWell,
    HighFoodSpending,
}

impl Suggestion {
    pub fn kind(&self) -> SuggestionKind {
        match self {
            Self::OverBudget | Self::NearBudgetLimit => SuggestionKind::Warning,
            Self::WithinBudget | Self::SavingWell => SuggestionKind::Positive,
            Self::HighFoodSpending => SuggestionKind::Tip,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::OverBudget => {
                "You are over budget. Reduce non-essential expenses like Entertainment."
            }
            Self::NearBudgetLimit => {
                "You're nearing your budget limit. Cut down on eating out or subscriptions."
            }
            Self::WithinBudget => "Great job staying within budget!",
            Self::SavingWell => {
                "You're saving well! Consider moving extra cash into investments or savings."
            }
            Self::HighFoodSpending => "Food expenses are high. Try meal prepping to save money.",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Evaluate every rule against the same snapshot
pub fn suggest(
    total_expenses: Money,
    total_income: Money,
    monthly_budget: Money,
    category_totals: &[CategoryTotal],
) -> Vec<Suggestion> {
    let mut suggestions = Vec::with_capacity(3);

    suggestions.push(if total_expenses > monthly_budget {
        Suggestion::OverBudget
    } else if total_expenses.exceeds_percent_of(monthly_budget, NEAR_LIMIT_PERCENT) {
        Suggestion::NearBudgetLimit
    } else {
        Suggestion::WithinBudget
    });

    if total_income.is_positive() && total_expenses.below_percent_of(total_income, SAVING_PERCENT)
    {
        suggestions.push(Suggestion::SavingWell);
    }

    let food = category_totals
        .iter()
        .find(|row| row.category == Category::Food);
    if let Some(food) = food {
        if food
            .total
            .exceeds_percent_of(total_expenses, FOOD_SHARE_PERCENT)
        {
            suggestions.push(Suggestion::HighFoodSpending);
        }
    }

    suggestions
}
