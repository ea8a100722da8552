//! Smart Budget - Terminal-based personal budget tracker
//!
//! This library provides the core functionality for the Smart Budget
//! application: an in-memory ledger of income and expense transactions with
//! CSV import and export, totals against a monthly budget, and rule-based
//! spending suggestions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, path management and logging setup
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, transactions)
//! - `storage`: The per-session ledger
//! - `services`: Manual entry and CSV import
//! - `export`: CSV export
//! - `reports`: Totals, category breakdown and suggestions
//! - `display`: Table formatting for command output
//! - `cli`: One-shot command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use smart_budget::models::Money;
//! use smart_budget::services::ImportService;
//! use smart_budget::storage::Session;
//!
//! let mut session = Session::new(Money::from_units(500));
//! let csv = "Date;Category;Amount;Note\n2025-01-03;Food;450;groceries\n";
//! ImportService::new(session.ledger_mut())
//!     .import_bytes(csv.as_bytes())
//!     .unwrap();
//!
//! let summary = session.summary();
//! assert_eq!(summary.total_expenses, Money::from_units(450));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult, ImportError};
