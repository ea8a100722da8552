//! Transaction history view
//!
//! Shows every transaction in insertion order

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{format_date_cell, truncate};
use crate::tui::app::App;

/// Render the transaction history table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let transactions = app.transactions();

    let block = Block::default()
        .title(format!(" Transaction History ({}) ", transactions.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if transactions.is_empty() {
        let text = Paragraph::new("No transactions. Press 'a' to add one or 'i' to import a CSV.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(15), // Category
        Constraint::Length(14), // Amount
        Constraint::Min(10),    // Note
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Note").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            let amount_style = if txn.is_income() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            let category_style = if txn.category.is_listed() {
                Style::default()
            } else {
                Style::default().fg(Color::Magenta)
            };

            Row::new(vec![
                Cell::from(format_date_cell(txn, &app.settings.date_format)),
                Cell::from(truncate(txn.category.name(), 15)).style(category_style),
                Cell::from(app.settings.format_money(txn.amount)).style(amount_style),
                Cell::from(truncate(txn.note(), 40)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_transaction_index));

    frame.render_stateful_widget(table, area, &mut state);
}
