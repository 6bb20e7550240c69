//! Clipboard access for share text

use thiserror::Error;

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(#[from] arboard::Error);

/// Destination for copied text
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by arboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
