//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, render_key_button, ButtonKind, BUTTON_HEIGHT};
pub use dialog::render_error_dialog;
