//! Core data models for Smart Budget
//!
//! This module contains the data structures of the ledger domain: money,
//! categories and transactions.

pub mod category;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
