//! Clipboard bridge: hand a document to the OS clipboard.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("nothing to copy: text is empty")]
    Empty,
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Destination for clipboard writes; swapped for a recorder in tests.
pub trait ClipboardSink {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// The OS clipboard, via arboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Copy `text` into `sink`. Empty (trimmed) text fails without touching the
/// sink.
pub fn copy_to(sink: &mut impl ClipboardSink, text: &str) -> Result<(), ClipboardError> {
    if text.trim().is_empty() {
        return Err(ClipboardError::Empty);
    }
    sink.set_text(text.to_string())
}

/// Copy `text` to the system clipboard.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut sink = SystemClipboard::new()?;
    copy_to(&mut sink, text)
}
