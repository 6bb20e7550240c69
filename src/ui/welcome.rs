//! Welcome screen with mission, calls to action and rotating testimonials

use super::components::{render_key_button, ButtonKind, BUTTON_HEIGHT};
use crate::app::App;
use crate::i18n::{TextKey, TESTIMONIALS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Title
            Constraint::Length(5),             // Mission
            Constraint::Length(BUTTON_HEIGHT), // Apply
            Constraint::Length(BUTTON_HEIGHT), // Contact
            Constraint::Length(5),             // Testimonial
            Constraint::Min(0),
        ])
        .split(centered_column(area, 72));

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            app.t(TextKey::AppName),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.t(TextKey::Tagline),
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let mission = Paragraph::new(vec![
        Line::from(app.t(TextKey::Mission)),
        Line::from(Span::styled(
            app.t(TextKey::NotLoans),
            Style::default().fg(Color::Green),
        )),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    frame.render_widget(mission, chunks[1]);

    render_key_button(
        frame,
        chunks[2],
        "Enter",
        app.t(TextKey::ApplyNow),
        ButtonKind::Primary,
        true,
    );
    render_key_button(
        frame,
        chunks[3],
        "w",
        app.t(TextKey::Whatsapp),
        ButtonKind::Contact,
        false,
    );

    let story = app.rotation.current();
    let testimonial = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("“{}”", app.t(story.text)),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            format!("— {}", app.t(story.name)),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(format!(" {} ", app.t(TextKey::SuccessStories)))
            .title_bottom(Line::from(rotation_dots(app.rotation.index())).centered())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(testimonial, chunks[4]);
}

/// One dot per testimonial, the shown one filled
fn rotation_dots(current: usize) -> String {
    (0..TESTIMONIALS.len())
        .map(|i| if i == current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Horizontally centered column no wider than `max_width`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
