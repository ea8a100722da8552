//! Terminal User Interface module
//!
//! This module provides the interactive Smart Budget screen using ratatui:
//! totals and suggestions in the sidebar, the transaction history and a
//! category chart in the main panel, and dialogs for entry, budget,
//! import and export.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
