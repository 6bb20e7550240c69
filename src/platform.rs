//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for copy shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Invite shortcut display
/// - macOS: "Cmd+Y"
/// - Linux/Windows: "Ctrl+Y"
#[cfg(target_os = "macos")]
pub const INVITE_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const INVITE_SHORTCUT: &str = "Ctrl+Y";

/// Program and leading arguments that open a URL with the desktop's
/// default handler
#[cfg(target_os = "macos")]
pub fn open_command() -> (&'static str, &'static [&'static str]) {
    ("open", &[])
}

#[cfg(target_os = "windows")]
pub fn open_command() -> (&'static str, &'static [&'static str]) {
    ("cmd", &["/C", "start", ""])
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn open_command() -> (&'static str, &'static [&'static str]) {
    ("xdg-open", &[])
}
