//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) | Event::Resize(_, _) => Ok(()),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }
    handle_normal_key(app, key)
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddTransaction),
        KeyCode::Char('b') => app.open_dialog(ActiveDialog::EditBudget),
        KeyCode::Char('i') => app.open_dialog(ActiveDialog::Import),
        KeyCode::Char('e') => app.open_dialog(ActiveDialog::Export),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_transaction_index = 0,
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        KeyCode::Char('x') | KeyCode::Esc => app.notifications.dismiss(),

        _ => {}
    }
    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::AddTransaction => {
            dialogs::transaction::handle_key(app, key);
        }
        ActiveDialog::EditBudget => {
            dialogs::budget::handle_key(app, key);
        }
        ActiveDialog::Import | ActiveDialog::Export => {
            dialogs::file::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Category, Money};
    use crate::storage::Session;
    use crate::tui::app::InputMode;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn create_test_app() -> App {
        App::new(Session::new(Money::from_units(500)), Settings::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn clear_focused(app: &mut App) {
        for _ in 0..20 {
            press(app, KeyCode::Backspace);
        }
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_add_transaction_through_dialog() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);
        assert_eq!(app.input_mode, InputMode::Editing);

        clear_focused(&mut app);
        type_text(&mut app, "2025-02-14");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "750");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "March rent");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        let txn = &app.transactions()[0];
        assert_eq!(txn.category, Category::Rent);
        assert_eq!(txn.amount, Money::from_units(750));
        assert_eq!(txn.note(), "March rent");
        assert_eq!(txn.date.unwrap().to_string(), "2025-02-14");
    }

    #[test]
    fn test_invalid_amount_keeps_dialog_open() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::AddTransaction);
        assert!(app.transaction_form.error_message.is_some());
        assert!(app.transactions().is_empty());

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_set_budget() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('b'));
        clear_focused(&mut app);
        type_text(&mut app, "1200.50");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.session.monthly_budget(), Money::from_cents(120_050));
    }

    #[test]
    fn test_import_through_dialog() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("in.csv");
        std::fs::write(&path, "Date;Category;Amount;Note\n2025-01-02;Food;12.50;lunch\n").unwrap();

        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, path.to_str().unwrap());
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.transactions().len(), 1);
        assert_eq!(
            app.notifications.current().unwrap().notification_type,
            crate::tui::widgets::NotificationType::Success
        );
    }

    #[test]
    fn test_import_missing_file_notifies_error() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "/definitely/not/here.csv");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert!(app.transactions().is_empty());
        assert_eq!(
            app.notifications.current().unwrap().notification_type,
            crate::tui::widgets::NotificationType::Error
        );
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('z'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = create_test_app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert!(!app.should_quit);
    }
}
