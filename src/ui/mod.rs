//! UI module for rendering the TUI

mod account;
mod components;
mod forms;
mod layout;
mod redirect;
mod sidebar;
mod welcome;

use crate::app::App;
use crate::i18n::TextKey;
use crate::state::Screen;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.screen() {
        Screen::Welcome => welcome::draw(frame, main_area, app),
        Screen::Account => account::draw(frame, main_area, app),
        Screen::Form => forms::draw(frame, main_area, app),
        Screen::Redirect => redirect::draw(frame, main_area, app),
    }

    if app.sidebar.open {
        sidebar::draw(frame, main_area, app);
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some(message) = &app.error_dialog {
        components::render_error_dialog(
            frame,
            app.t(TextKey::HandoffFailed),
            message,
            app.t(TextKey::Close),
        );
    }
}
