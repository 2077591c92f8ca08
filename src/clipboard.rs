//! System clipboard access.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Destination for copied text
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Host clipboard via arboard, opened on first use
///
/// The handle is kept for the lifetime of the app because on X11 the copied
/// contents disappear when the owning `Clipboard` is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        if let Some(clipboard) = self.inner.as_mut() {
            clipboard.set_text(text)?;
        }
        Ok(())
    }
}
