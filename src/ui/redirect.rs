//! Confirmation screen shown while the application is handed off

use super::components::{render_key_button, ButtonKind, BUTTON_HEIGHT};
use super::welcome::centered_column;
use crate::app::App;
use crate::i18n::TextKey;
use crate::state::HandoffStatus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use uuid::Uuid;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(10),            // Message
            Constraint::Length(BUTTON_HEIGHT), // Open manually
            Constraint::Length(BUTTON_HEIGHT), // Start over
            Constraint::Min(0),
        ])
        .split(centered_column(area, 64));

    let status = app.controller.handoff_status();
    let mut lines = vec![
        Line::from(Span::styled(
            app.t(TextKey::ThankYou),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(app.t(TextKey::ApplicationSubmitted)),
        Line::from(""),
    ];

    match status {
        HandoffStatus::Failed { link } => {
            lines.push(Line::from(Span::styled(
                app.t(TextKey::HandoffFailed),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(Span::styled(
                link.as_str(),
                Style::default().fg(Color::Cyan),
            )));
        }
        HandoffStatus::Scheduled => {
            lines.push(Line::from(Span::styled(
                app.t(TextKey::Redirecting),
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(app.t(TextKey::RedirectHint)));
        }
        HandoffStatus::Opened | HandoffStatus::Idle => {
            lines.push(Line::from(app.t(TextKey::RedirectHint)));
        }
    }

    if let Some(at) = app.controller.submitted_at() {
        lines.push(Line::from(Span::styled(
            format!(
                "{} · #{}",
                at.format("%Y-%m-%d %H:%M"),
                short_reference(app.controller.session_id())
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let message = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).border_style(
            Style::default().fg(if status.failed_link().is_some() {
                Color::Red
            } else {
                Color::Green
            }),
        ));
    frame.render_widget(message, chunks[1]);

    render_key_button(
        frame,
        chunks[2],
        "o",
        app.t(TextKey::OpenManually),
        ButtonKind::Contact,
        true,
    );
    render_key_button(
        frame,
        chunks[3],
        "s",
        app.t(TextKey::StartOver),
        ButtonKind::Plain,
        false,
    );
}

/// First eight hex digits of the session id, shown as an application number
fn short_reference(id: Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}
