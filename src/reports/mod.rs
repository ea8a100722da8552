//! Reports module for Smart Budget
//!
//! Aggregates the ledger into totals and derives spending suggestions from
//! them.

pub mod suggestions;
pub mod summary;

pub use suggestions::{suggest, Suggestion, SuggestionKind};
pub use summary::{CategoryTotal, LedgerSummary};
