//! Sidebar view
//!
//! Shows the totals and the budgeting suggestions

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::reports::{LedgerSummary, SuggestionKind};
use crate::tui::app::App;
use crate::tui::layout::SidebarLayout;

const EMPTY_HINT: &str = "No transactions yet. Press 'a' to add your first expense or income.";

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, summary: &LedgerSummary, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_totals(frame, app, summary, layout.totals);
    render_suggestions(frame, summary, layout.suggestions);
}

fn render_totals(frame: &mut Frame, app: &App, summary: &LedgerSummary, area: Rect) {
    let block = Block::default()
        .title(" Smart Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let money = |amount| app.settings.format_money(amount);
    let balance_color = if summary.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        total_line("Total Expenses", money(summary.total_expenses), Color::Red),
        total_line("Total Income", money(summary.total_income), Color::Green),
        total_line("Balance", money(summary.balance), balance_color),
        total_line("Monthly Budget", money(summary.monthly_budget), Color::Cyan),
        Line::from(Span::styled(
            format!("{} transactions", summary.transaction_count),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn total_line(label: &'static str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<15}", label), Style::default().fg(Color::White)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

fn render_suggestions(frame: &mut Frame, summary: &LedgerSummary, area: Rect) {
    let block = Block::default()
        .title(" Suggestions ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if summary.is_empty() {
        let hint = Paragraph::new(EMPTY_HINT)
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = summary
        .suggestions()
        .into_iter()
        .map(|suggestion| {
            let (marker, color) = match suggestion.kind() {
                SuggestionKind::Warning => ("! ", Color::Red),
                SuggestionKind::Positive => ("+ ", Color::Green),
                SuggestionKind::Tip => ("* ", Color::Yellow),
            };
            let width = area.width.saturating_sub(4) as usize;
            let mut lines = Vec::new();
            for (i, chunk) in wrap_words(suggestion.message(), width.saturating_sub(2))
                .into_iter()
                .enumerate()
            {
                let prefix = if i == 0 { marker } else { "  " };
                lines.push(Line::from(vec![
                    Span::styled(prefix, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Span::styled(chunk, Style::default().fg(color)),
                ]));
            }
            ListItem::new(lines)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Greedy word wrap; List items do not wrap on their own
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = current.chars().count() + word.chars().count() + usize::from(!current.is_empty());
        if !current.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
