use crate::domain::AppError;

/// Port for writing to the system clipboard.
pub trait ClipboardWriter {
    /// Write text to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}

/// Clipboard that discards writes. Used in tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopClipboard;

impl ClipboardWriter for NoopClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), AppError> {
        Ok(())
    }
}
