//! Application state for the TUI
//!
//! The App struct owns the session and holds all state needed for rendering
//! and handling events.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::warn;

use crate::cli::FileImport;
use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::export_transactions_csv;
use crate::models::{Money, Transaction};
use crate::reports::LedgerSummary;
use crate::services::{CreateTransactionInput, ImportOutcome, ImportService, TransactionService};
use crate::storage::Session;

use super::dialogs::budget::BudgetFormState;
use super::dialogs::file::{FileAction, FilePromptState};
use super::dialogs::transaction::TransactionFormState;
use super::widgets::{Notification, NotificationQueue};

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    EditBudget,
    Import,
    Export,
    Help,
}

/// Main application state
pub struct App {
    /// The session ledger and budget
    pub session: Session,

    /// Application settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the transaction history
    pub selected_transaction_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Toast notifications
    pub notifications: NotificationQueue,

    /// Transaction form state
    pub transaction_form: TransactionFormState,

    /// Monthly budget dialog state
    pub budget_form: BudgetFormState,

    /// Import/export path dialog state
    pub file_prompt: FilePromptState,
}

impl App {
    /// Create a new App instance
    pub fn new(session: Session, settings: Settings) -> Self {
        Self {
            session,
            settings,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_transaction_index: 0,
            status_message: None,
            notifications: NotificationQueue::new(),
            transaction_form: TransactionFormState::new(),
            budget_form: BudgetFormState::default(),
            file_prompt: FilePromptState::default(),
        }
    }

    /// Report imports that ran before the UI started
    pub fn report_startup_imports(&mut self, imports: &[FileImport]) {
        for import in imports {
            match &import.result {
                Ok(outcome) => self.notify(Notification::success(format!(
                    "{}: {}",
                    import.path.display(),
                    outcome.summary()
                ))),
                Err(e) => self.notify(Notification::error(format!(
                    "{}: {}",
                    import.path.display(),
                    e
                ))),
            }
        }
        if let Some(last) = imports.iter().rev().find(|i| i.is_ok()) {
            self.set_status(format!("Loaded {}", last.path.display()));
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Queue a toast notification
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Aggregate the ledger with the current budget
    pub fn summary(&self) -> LedgerSummary {
        self.session.summary()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.session.ledger().all()
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddTransaction => {
                self.transaction_form = TransactionFormState::new();
            }
            ActiveDialog::EditBudget => {
                self.budget_form = BudgetFormState::new(self.session.monthly_budget());
            }
            ActiveDialog::Import => {
                self.file_prompt = FilePromptState::new(FileAction::Import, "");
            }
            ActiveDialog::Export => {
                if self.session.ledger().is_empty() {
                    self.notify(Notification::warning(
                        "No transactions to export yet. Add or import some first.",
                    ));
                    return;
                }
                let default_path = self.settings.export_file_name.clone();
                self.file_prompt = FilePromptState::new(FileAction::Export, default_path);
            }
            ActiveDialog::Help | ActiveDialog::None => {}
        }

        self.input_mode = match dialog {
            ActiveDialog::Help | ActiveDialog::None => InputMode::Normal,
            _ => InputMode::Editing,
        };
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Move the history selection up
    pub fn move_up(&mut self) {
        self.selected_transaction_index = self.selected_transaction_index.saturating_sub(1);
    }

    /// Move the history selection down
    pub fn move_down(&mut self) {
        let max = self.session.ledger().len().saturating_sub(1);
        if self.selected_transaction_index < max {
            self.selected_transaction_index += 1;
        }
    }

    /// Jump to the newest transaction
    pub fn select_last(&mut self) {
        self.selected_transaction_index = self.session.ledger().len().saturating_sub(1);
    }

    /// Append a manually entered transaction
    pub fn add_transaction(&mut self, input: CreateTransactionInput) {
        let txn = TransactionService::new(self.session.ledger_mut()).create(input);
        self.select_last();
        self.set_status(format!(
            "Added {} {}",
            txn.category,
            self.settings.format_money(txn.amount)
        ));
        self.notify(Notification::success("Transaction added!"));
    }

    /// Replace the monthly budget
    pub fn set_monthly_budget(&mut self, budget: Money) {
        self.session.set_monthly_budget(budget);
        self.set_status(format!(
            "Monthly budget set to {}",
            self.settings.format_money(budget)
        ));
    }

    /// Import a CSV file into the session
    pub fn import_file(&mut self, path: &Path) -> BudgetResult<ImportOutcome> {
        let outcome = ImportService::new(self.session.ledger_mut()).import_file(path)?;
        self.set_status(format!("Imported {}", path.display()));
        self.notify(Notification::success(outcome.summary()));
        Ok(outcome)
    }

    /// Export the session ledger to a CSV file
    pub fn export_file(&mut self, path: &Path) -> BudgetResult<()> {
        let file = File::create(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "export file not writable");
            BudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?;
        export_transactions_csv(self.session.ledger(), BufWriter::new(file))?;

        let rows = self.session.ledger().len();
        self.set_status(format!("Exported to {}", path.display()));
        self.notify(Notification::success(format!(
            "Exported {} transactions to {}",
            rows,
            path.display()
        )));
        Ok(())
    }
}
