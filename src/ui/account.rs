//! Account choice screen

use super::components::{render_button, ButtonKind, BUTTON_HEIGHT};
use super::welcome::centered_column;
use crate::app::App;
use crate::i18n::TextKey;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(centered_column(area, 48));

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            app.t(TextKey::WelcomeBack),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.t(TextKey::AccountPrompt),
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[1]);

    let selected = app.account_selection.0;
    render_button(
        frame,
        chunks[2],
        app.t(TextKey::CreateAccount),
        ButtonKind::Primary,
        selected == 0,
    );
    render_button(
        frame,
        chunks[3],
        app.t(TextKey::Login),
        ButtonKind::Plain,
        selected == 1,
    );
}
