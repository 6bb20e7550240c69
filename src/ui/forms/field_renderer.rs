//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// What to draw for one form field
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Translated validation message, if any
    pub error: Option<&'a str>,
    /// Guidance shown when there is no error
    pub hint: Option<String>,
    pub is_active: bool,
    pub is_multiline: bool,
    /// Draw the value between arrows instead of with a cursor
    pub is_choice: bool,
}

/// Rows a field needs, borders included
pub fn field_height(is_multiline: bool) -> u16 {
    if is_multiline {
        5
    } else {
        3
    }
}

/// Draw a bordered field. An error turns the border red and is shown in the
/// bottom border in place of the hint.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let accent = match (field.error.is_some(), field.is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };
    let value_style = if field.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));

    let content = if field.is_choice {
        let arrow = Style::default().fg(if field.is_active {
            Color::Cyan
        } else {
            Color::DarkGray
        });
        let value = if field.value.is_empty() { "-" } else { field.value };
        Paragraph::new(Line::from(vec![
            Span::styled("◀ ", arrow),
            Span::styled(value, value_style),
            Span::styled(" ▶", arrow),
        ]))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if field.is_active {
            match lines.last_mut() {
                Some(last) => last.spans.push(cursor),
                None => lines.push(Line::from(cursor)),
            }
        }
        Paragraph::new(lines).wrap(Wrap { trim: false })
    } else {
        let mut spans = vec![Span::styled(field.value, value_style)];
        if field.is_active {
            spans.push(cursor);
        }
        Paragraph::new(Line::from(spans))
    };

    let mut block = Block::default()
        .title(Span::styled(
            format!(" {} ", field.label),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    if let Some(error) = field.error {
        block = block.title_bottom(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(hint) = &field.hint {
        block = block.title_bottom(Span::styled(
            format!(" {hint} "),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(content.block(block), area);
}
