//! Session storage for Smart Budget
//!
//! Everything lives in memory for the duration of one session: the
//! transaction ledger and the monthly budget. Nothing is written to disk.

pub mod ledger;

pub use ledger::Ledger;

use crate::models::Money;
use crate::reports::{LedgerSummary, Suggestion};

/// Per-session context passed to every ledger operation
///
/// One instance is created when a session starts and dropped when it ends;
/// there is no shared or global ledger.
#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: Ledger,
    monthly_budget: Money,
}

impl Session {
    /// Start an empty session with the given monthly budget
    pub fn new(monthly_budget: Money) -> Self {
        Self {
            ledger: Ledger::new(),
            monthly_budget,
        }
    }

    /// The session's ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Mutable access for services that append to the ledger
    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// The current monthly budget
    pub fn monthly_budget(&self) -> Money {
        self.monthly_budget
    }

    /// Replace the monthly budget
    pub fn set_monthly_budget(&mut self, budget: Money) {
        self.monthly_budget = budget;
    }

    /// Aggregate the ledger against the current budget
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::generate(&self.ledger, self.monthly_budget)
    }

    /// Evaluate the suggestion rules on a fresh summary
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.summary().suggestions()
    }
}
