//! Monthly budget dialog

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State for the monthly budget dialog
#[derive(Debug, Clone, Default)]
pub struct BudgetFormState {
    /// Budget before editing
    pub current_amount: Money,
    /// Amount being typed
    pub amount_input: TextInput,
    /// Error message
    pub error_message: Option<String>,
}

impl BudgetFormState {
    /// Pre-fill the input with the current budget
    pub fn new(current_amount: Money) -> Self {
        let mut amount_input = TextInput::new().label("New amount").placeholder("0.00");
        if !current_amount.is_zero() {
            amount_input.set_value(current_amount.to_string());
        }
        amount_input.focused = true;

        Self {
            current_amount,
            amount_input,
            error_message: None,
        }
    }

    /// Insert a character, ignoring anything that cannot appear in an amount
    pub fn insert_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            self.amount_input.insert(c);
            self.error_message = None;
        }
    }

    /// Parse the input; an empty input means no budget
    pub fn parse_amount(&self) -> Result<Money, String> {
        let raw = self.amount_input.value().trim();
        if raw.is_empty() {
            return Ok(Money::zero());
        }
        let amount = Money::parse(raw).map_err(|_| "Invalid amount format".to_string())?;
        if amount.is_negative() {
            return Err("Budget cannot be negative".to_string());
        }
        Ok(amount)
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the monthly budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(50, 9, frame.area());

    frame.render_widget(Clear, area);

    let state = &app.budget_form;

    let block = Block::default()
        .title(" Monthly Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Current amount
            Constraint::Length(1), // Amount input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let current_line = Line::from(vec![
        Span::styled(format!("{:>10}: ", "Current"), Style::default().fg(Color::Yellow)),
        Span::styled(
            app.settings.format_money(state.current_amount),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(current_line), chunks[1]);

    frame.render_widget(&state.amount_input, chunks[2]);

    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[3]);
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Ctrl+U]", Style::default().fg(Color::Yellow)),
        Span::raw(" Clear  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

/// Handle key input for the budget dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            true
        }

        KeyCode::Enter => {
            match app.budget_form.parse_amount() {
                Ok(amount) => {
                    app.set_monthly_budget(amount);
                    app.close_dialog();
                }
                Err(e) => app.budget_form.set_error(e),
            }
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.budget_form.amount_input.clear();
            true
        }

        KeyCode::Char(c) => {
            app.budget_form.insert_char(c);
            true
        }

        KeyCode::Backspace => {
            app.budget_form.amount_input.backspace();
            app.budget_form.error_message = None;
            true
        }

        KeyCode::Left => {
            app.budget_form.amount_input.move_left();
            true
        }

        KeyCode::Right => {
            app.budget_form.amount_input.move_right();
            true
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill() {
        let state = BudgetFormState::new(Money::from_cents(150_050));
        assert_eq!(state.amount_input.value(), "1500.50");

        let empty = BudgetFormState::new(Money::zero());
        assert_eq!(empty.amount_input.value(), "");
        assert_eq!(empty.parse_amount().unwrap(), Money::zero());
    }

    #[test]
    fn test_insert_filters_characters() {
        let mut state = BudgetFormState::new(Money::zero());
        for c in "2a0x0.5".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.amount_input.value(), "200.5");
        assert_eq!(state.parse_amount().unwrap(), Money::from_cents(20_050));
    }
}
