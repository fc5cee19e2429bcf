//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the session form and console using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::config::UiSettings;
use crate::runtime::{EventLoopState, Field};
use crate::session::Session;

const CONTROLS: [(&str, &str); 6] = [
    ("tab/↑↓", "next/prev field"),
    ("enter", "apply field"),
    ("space", "toggle sides"),
    ("ctrl-g/F5", "generate"),
    ("ctrl-s", "save"),
    ("esc", "quit"),
];

/// Render the controls help text.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// One `label: value` row of the form, highlighted when focused.
fn field_line<'a>(label: &'a str, value: String, focused: bool) -> Line<'a> {
    let marker = if focused { "> " } else { "  " };
    let mut value = Span::raw(value);
    if focused {
        value = value.add_modifier(Modifier::REVERSED);
    }
    Line::from(vec![
        Span::raw(marker),
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        value,
    ])
}

/// First console line to show so the newest lines stay visible, minus any
/// manual scroll-back.
fn console_offset(total: usize, height: usize, scroll_back: usize) -> usize {
    total.saturating_sub(height).saturating_sub(scroll_back)
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, session: &Session, state: &EventLoopState, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" tracklister ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Form
    let focused = |f: Field| state.focus == f;
    let side_mode = if session.side_mode {
        "[x] A1, A2, B1, B2"
    } else {
        "[ ] 01, 02, 03"
    };
    let form = vec![
        field_line(
            "Directory:",
            state.directory_input.clone(),
            focused(Field::Directory),
        ),
        field_line(
            "Side numbering:",
            side_mode.to_string(),
            focused(Field::SideMode),
        ),
        field_line(
            "Tracks on side A:",
            state.a_side_input.clone(),
            focused(Field::ASide),
        ),
        field_line(
            "Tracks on side B:",
            state.b_side_input.clone(),
            focused(Field::BSide),
        ),
        field_line(
            "Save as:",
            state.save_input.clone(),
            focused(Field::SavePath),
        ),
    ];
    let form_par = Paragraph::new(form).block(
        Block::bordered()
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            })
            .title(" options "),
    );
    frame.render_widget(form_par, chunks[1]);

    // Console
    {
        let area = chunks[2];
        let lines = session.console();
        let height = area.height.saturating_sub(2) as usize;
        let start = console_offset(lines.len(), height, state.console_scroll);
        let visible: Vec<Line> = lines
            .iter()
            .skip(start)
            .take(height)
            .map(|l| Line::from(l.as_str()))
            .collect();

        let title = match &session.directory {
            Some(dir) => format!(" console • {} ", dir.display()),
            None => " console ".to_string(),
        };
        let console = Paragraph::new(visible).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        );
        frame.render_widget(console, area);
    }

    let footer = Paragraph::new(controls_text())
        .block(Block::default().borders(Borders::ALL).title(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
