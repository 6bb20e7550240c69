//! Boxed buttons

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Main call to action
    Primary,
    /// Messaging shortcut
    Contact,
    Plain,
}

impl ButtonKind {
    fn accent(self) -> Color {
        match self {
            Self::Primary => Color::Yellow,
            Self::Contact => Color::Green,
            Self::Plain => Color::Cyan,
        }
    }
}

/// Render a centered button label inside a border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    kind: ButtonKind,
    is_selected: bool,
) {
    let accent = kind.accent();
    let border_style = if is_selected {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text_style = if is_selected {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(label.to_string())
        .style(text_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    frame.render_widget(paragraph, area);
}

/// Render a button whose label is prefixed with its shortcut key
pub fn render_key_button(
    frame: &mut Frame,
    area: Rect,
    key: &str,
    label: &str,
    kind: ButtonKind,
    is_selected: bool,
) {
    render_button(frame, area, &format!("[{key}] {label}"), kind, is_selected);
}
