//! Spending by category chart

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::reports::LedgerSummary;
use crate::tui::app::App;

/// Render expense totals per category as horizontal bars
pub fn render(frame: &mut Frame, app: &App, summary: &LedgerSummary, area: Rect) {
    let block = Block::default()
        .title(" Spending by Category ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if summary.category_totals.is_empty() {
        let text = Paragraph::new("No expenses yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let bars: Vec<Bar> = summary
        .category_totals
        .iter()
        .map(|row| {
            // Bars cannot go below zero; the label keeps the real total
            let value = u64::try_from(row.total.cents()).unwrap_or(0);
            Bar::default()
                .label(Line::from(row.category.name().to_string()))
                .value(value)
                .text_value(app.settings.format_money(row.total))
                .style(Style::default().fg(Color::Yellow))
                .value_style(Style::default().fg(Color::Black).bg(Color::Yellow))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
