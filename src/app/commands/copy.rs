use crate::domain::AppError;
use crate::ports::{ClipboardWriter, DraftStore};

use super::review;

/// Copy the order summary for the saved draft to the clipboard.
/// Returns the copied text.
pub fn execute(
    drafts: &impl DraftStore,
    clipboard: &mut impl ClipboardWriter,
) -> Result<String, AppError> {
    let text = review::execute(drafts)?;
    clipboard.write_text(&text)?;
    Ok(text)
}
