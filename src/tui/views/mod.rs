//! TUI Views module
//!
//! Contains the sidebar, the transaction history, the category chart and the
//! status bar.

pub mod chart;
pub mod history;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{notification_rect, AppLayout, MainPanelLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let summary = app.summary();

    sidebar::render(frame, app, &summary, layout.sidebar);

    let main = MainPanelLayout::new(layout.main);
    history::render(frame, app, main.history);
    chart::render(frame, app, &summary, main.chart);

    status_bar::render(frame, app, &summary, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_rect(frame.area()),
        );
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::AddTransaction => dialogs::transaction::render(frame, app),
        ActiveDialog::EditBudget => dialogs::budget::render(frame, app),
        ActiveDialog::Import | ActiveDialog::Export => dialogs::file::render(frame, app),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Category, Money, Transaction};
    use crate::storage::Session;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_with(budget: i64, rows: &[(Category, i64)]) -> App {
        let mut session = Session::new(Money::from_units(budget));
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        for (category, units) in rows {
            session
                .ledger_mut()
                .append(Transaction::new(date, category.clone(), Money::from_units(*units)));
        }
        App::new(session, Settings::default())
    }

    #[test]
    fn test_empty_ledger_shows_hint() {
        let screen = draw(&app_with(0, &[]));
        assert!(screen.contains("Total Expenses"));
        assert!(screen.contains("No transactions yet."));
        assert!(screen.contains("No expenses yet."));
    }

    #[test]
    fn test_totals_and_history() {
        let app = app_with(
            500,
            &[(Category::Income, 1000), (Category::Food, 200), (Category::Transport, 100)],
        );
        let screen = draw(&app);

        assert!(screen.contains("R 300.00"));
        assert!(screen.contains("R 1,000.00"));
        assert!(screen.contains("R 700.00"));
        assert!(screen.contains("Transaction History (3)"));
        assert!(screen.contains("Transport"));
    }

    #[test]
    fn test_suggestion_is_listed() {
        let app = app_with(500, &[(Category::Rent, 600)]);
        let screen = draw(&app);
        assert!(screen.contains("Suggestions"));
        assert!(screen.contains("! You"));
    }

    #[test]
    fn test_dialog_and_notification_overlay() {
        let mut app = app_with(0, &[]);
        app.open_dialog(ActiveDialog::AddTransaction);
        app.notify(crate::tui::widgets::Notification::info("Hello there"));

        let screen = draw(&app);
        assert!(screen.contains("Add Transaction"));
        assert!(screen.contains("Hello there"));
    }
}
