//! Dialog modules for the TUI
//!
//! Contains modal dialogs for entry, budget, import/export and help

pub mod budget;
pub mod file;
pub mod help;
pub mod transaction;
