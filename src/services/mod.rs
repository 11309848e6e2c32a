mod clipboard_arboard;
mod draft_filesystem;
mod notion_api;

pub use clipboard_arboard::ArboardClipboard;
pub use draft_filesystem::{FilesystemDraftStore, PROVISION_DIR};
pub use notion_api::HttpRecordClient;
