//! Clipboard access seam.
//!
//! The paste command reads the clipboard exactly once, before the document is touched. Real
//! hosts implement [`ClipboardSource`] over their platform clipboard; [`StaticClipboard`]
//! serves fixed text.

use crate::ClipboardError;

/// Something that can hand out the current clipboard text.
pub trait ClipboardSource {
    /// Return the clipboard contents. An empty string means "nothing to paste".
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}

/// A clipboard holding a fixed piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticClipboard {
    text: Option<String>,
}

impl StaticClipboard {
    /// A clipboard that always returns `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// A clipboard with no backend, failing every read with
    /// [`ClipboardError::NotAvailable`].
    pub fn unavailable() -> Self {
        Self { text: None }
    }
}

impl ClipboardSource for StaticClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.text.clone().ok_or(ClipboardError::NotAvailable)
    }
}

impl<F> ClipboardSource for F
where
    F: FnMut() -> Result<String, ClipboardError>,
{
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self()
    }
}
