use crate::domain::{AppError, derive_complexity, derive_network_equipment, format_order_text};
use crate::ports::DraftStore;

/// Render the order summary for the saved draft.
pub fn execute(drafts: &impl DraftStore) -> Result<String, AppError> {
    let snapshot = drafts.load()?;
    let equipment = derive_network_equipment(&snapshot);
    let complexity = derive_complexity(&snapshot, &equipment);
    Ok(format_order_text(&snapshot, &equipment, &complexity))
}
