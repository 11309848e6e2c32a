use crate::domain::AppError;
use crate::ports::{DraftStore, OrderRecord, RecordClient, RecordReceipt};

/// Derive the record for the saved draft and submit it to the record
/// service. The customer name must be set; everything else may be
/// partial.
pub fn execute(
    drafts: &impl DraftStore,
    records: &impl RecordClient,
) -> Result<RecordReceipt, AppError> {
    let snapshot = drafts.load()?;
    let record = OrderRecord::from_snapshot(&snapshot)?;
    records.create_order(&record)
}
