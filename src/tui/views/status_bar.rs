//! Status bar view
//!
//! Shows the budget, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::reports::LedgerSummary;
use crate::tui::app::App;

const HINTS: &str = " a:Add  b:Budget  i:Import  e:Export  ?:Help  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, summary: &LedgerSummary, area: Rect) {
    let mut spans = vec![];

    let balance_color = if summary.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    spans.push(Span::styled(" Bal: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        app.settings.format_money(summary.balance),
        Style::default()
            .fg(balance_color)
            .add_modifier(Modifier::BOLD),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
