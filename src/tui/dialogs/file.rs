//! CSV import/export path prompt

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{Notification, TextInput};

/// What the prompt does with the entered path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileAction {
    #[default]
    Import,
    Export,
}

impl FileAction {
    fn title(self) -> &'static str {
        match self {
            Self::Import => " Import CSV ",
            Self::Export => " Export CSV ",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            Self::Import => "Columns: Date, Category, Amount, Note (';' or ',' delimited)",
            Self::Export => "Writes comma-delimited UTF-8 with a header row",
        }
    }
}

/// State for the import/export prompt
#[derive(Debug, Clone, Default)]
pub struct FilePromptState {
    pub action: FileAction,
    pub input: TextInput,
    pub error_message: Option<String>,
}

impl FilePromptState {
    pub fn new(action: FileAction, initial: impl Into<String>) -> Self {
        let mut input = TextInput::new()
            .label("Path")
            .placeholder("path/to/file.csv")
            .content(initial);
        input.focused = true;

        Self {
            action,
            input,
            error_message: None,
        }
    }

    /// The entered path, or an error if nothing was typed
    pub fn path(&self) -> Result<PathBuf, String> {
        let raw = self.input.value().trim();
        if raw.is_empty() {
            return Err("Enter a file path".to_string());
        }
        Ok(PathBuf::from(raw))
    }
}

/// Render the prompt
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(64, 8, frame.area());
    let state = &app.file_prompt;

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(state.action.title())
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
            Constraint::Length(1), // Hint
            Constraint::Length(1), // Path
            Constraint::Length(1), // Error
            Constraint::Length(1), // Keys
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            state.action.hint(),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[0],
    );
    frame.render_widget(&state.input, chunks[1]);

    if let Some(ref error) = state.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[2],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Confirm  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}

/// Handle key input for the prompt
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.close_dialog(),

        KeyCode::Enter => {
            let path = match app.file_prompt.path() {
                Ok(path) => path,
                Err(e) => {
                    app.file_prompt.error_message = Some(e);
                    return true;
                }
            };

            let result = match app.file_prompt.action {
                FileAction::Import => app.import_file(&path).map(|_| ()),
                FileAction::Export => app.export_file(&path),
            };

            // Failures close the prompt too; the notification carries the reason
            if let Err(e) = result {
                app.notify(Notification::error(e.to_string()));
            }
            app.close_dialog();
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.file_prompt.input.clear();
        }

        KeyCode::Char(c) => {
            app.file_prompt.error_message = None;
            app.file_prompt.input.insert(c);
        }

        KeyCode::Backspace => {
            app.file_prompt.error_message = None;
            app.file_prompt.input.backspace();
        }

        KeyCode::Delete => app.file_prompt.input.delete(),
        KeyCode::Left => app.file_prompt.input.move_left(),
        KeyCode::Right => app.file_prompt.input.move_right(),
        KeyCode::Home => app.file_prompt.input.move_start(),
        KeyCode::End => app.file_prompt.input.move_end(),

        _ => return false,
    }

    true
}
