use crate::domain::AppError;
use crate::ports::DraftStore;

/// Discard the saved draft.
pub fn execute(drafts: &impl DraftStore) -> Result<(), AppError> {
    drafts.clear()
}
