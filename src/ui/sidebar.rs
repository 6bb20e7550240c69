//! Side panel overlay with secondary actions

use super::components::{render_button, ButtonKind, BUTTON_HEIGHT};
use crate::app::{App, SidebarItem};
use crate::i18n::TextKey;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Width of the panel in columns
const PANEL_WIDTH: u16 = 26;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let panel = Rect {
        width: PANEL_WIDTH.min(area.width),
        ..area
    };
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .title(format!(" {} ", app.t(TextKey::Menu)))
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut constraints: Vec<Constraint> = SidebarItem::ALL
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, item) in SidebarItem::ALL.iter().enumerate() {
        let label = match item {
            SidebarItem::Language => format!(
                "{}: {}",
                app.t(TextKey::Language),
                app.t(app.locale.next().name_key())
            ),
            other => app.t(other.label_key()).to_string(),
        };
        render_button(
            frame,
            rows[idx],
            &label,
            ButtonKind::Plain,
            idx == app.sidebar.selected,
        );
    }
}
