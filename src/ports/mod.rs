mod clipboard_writer;
mod draft_store;
mod record_client;

pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
pub use draft_store::DraftStore;
pub use record_client::{MockRecordClient, OrderRecord, RecordClient, RecordReceipt};
