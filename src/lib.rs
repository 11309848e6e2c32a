//! provision: Plan restaurant POS hardware orders and record them in Notion.
//!
//! The interactive wizard collects stations, peripherals, printers, and
//! infrastructure answers into a draft. Network equipment, installation
//! complexity, and the order text are derived from the draft, never stored.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::commands::{copy, reset, review, submit};
use ports::{DraftStore, MockRecordClient, RecordReceipt};
use services::{ArboardClipboard, FilesystemDraftStore, HttpRecordClient};

pub use domain::AppError;

/// Render the order summary for the saved draft.
pub fn review() -> Result<String, AppError> {
    let drafts = FilesystemDraftStore::current()?;
    review::execute(&drafts)
}

/// Copy the order summary for the saved draft to the clipboard.
/// Returns the copied text.
pub fn copy_summary() -> Result<String, AppError> {
    let drafts = FilesystemDraftStore::current()?;
    let mut clipboard = ArboardClipboard::new()?;
    copy::execute(&drafts, &mut clipboard)
}

/// Create the Notion record for the saved draft.
///
/// With `mock` set, the record is printed instead of sent and no
/// credentials are required.
pub fn submit(mock: bool) -> Result<RecordReceipt, AppError> {
    let drafts = FilesystemDraftStore::current()?;
    if mock {
        submit::execute(&drafts, &MockRecordClient)
    } else {
        let client = HttpRecordClient::from_env()?;
        submit::execute(&drafts, &client)
    }
}

/// Discard the saved draft. Returns whether a draft was discarded.
pub fn reset() -> Result<bool, AppError> {
    let drafts = FilesystemDraftStore::current()?;
    if !drafts.exists() {
        return Ok(false);
    }
    reset::execute(&drafts)?;
    Ok(true)
}
