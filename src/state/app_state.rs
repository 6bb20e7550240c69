//! Application state definitions

/// Top-level screen in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Account,
    Form,
    /// Terminal screen shown after a successful submit
    Redirect,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Account => "account",
            Self::Form => "form",
            Self::Redirect => "redirect",
        }
    }
}

/// Events delivered to the main loop by timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The delayed messaging handoff after submit is due
    HandoffDue,
    /// Show the next testimonial on the welcome screen
    RotateTestimonial,
}

/// Progress of the messaging handoff for the submitted application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HandoffStatus {
    #[default]
    Idle,
    Scheduled,
    Opened,
    /// Opening failed; the link is kept so the user can open it by hand
    Failed { link: String },
}

impl HandoffStatus {
    pub fn failed_link(&self) -> Option<&str> {
        match self {
            Self::Failed { link } => Some(link),
            _ => None,
        }
    }
}
