//! Application state module

mod app_state;
mod forms;
mod view_controller;

pub use app_state::*;
pub use forms::*;
pub use view_controller::*;
