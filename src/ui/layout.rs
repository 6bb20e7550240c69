//! Layout components (header, status bar)

use crate::app::App;
use crate::i18n::TextKey;
use crate::platform::INVITE_SHORTCUT;
use crate::state::Screen;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the terminal into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the app name and the menu/account shortcuts
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Span::styled(
        format!(" {} ", app.t(TextKey::AppName)),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let key = Style::default().fg(Color::Cyan);
    let spans = vec![
        title,
        Span::raw("  "),
        Span::styled("F2", key),
        Span::raw(format!(" {}  ", app.t(TextKey::Menu))),
        Span::styled("F3", key),
        Span::raw(format!(" {}  ", app.t(TextKey::Profile))),
        Span::styled(
            format!("[{}]", app.locale.code()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black)),
        area,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.screen().label()),
        Style::default().fg(Color::Black).bg(Color::Yellow),
    )];

    spans.push(Span::styled(
        format!(" {} ", screen_hints(app.screen())),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.notice {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = format!(" {INVITE_SHORTCUT}:invite  ^C:quit ");
    let width = quit_hint.chars().count() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width: width.min(area.width),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray)),
        quit_area,
    );
}

fn screen_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Welcome => "Enter:apply  w:whatsapp  l:language  q:quit",
        Screen::Account => "↑/↓:select  Enter:continue  Esc:back",
        Screen::Form => "Tab:next field  Enter:continue  Esc:back",
        Screen::Redirect => "o:open link  s:start over  q:quit",
    }
}
