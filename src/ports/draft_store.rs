use crate::domain::{AppError, Snapshot};

/// Port for persisting the in-progress order draft between sessions.
///
/// The stored format is an implementation detail of the adapter, not a
/// compatibility contract.
pub trait DraftStore {
    /// Whether a draft is currently saved.
    fn exists(&self) -> bool;

    /// Persist the draft, replacing any previous one.
    fn save(&self, snapshot: &Snapshot) -> Result<(), AppError>;

    /// Load the saved draft.
    fn load(&self) -> Result<Snapshot, AppError>;

    /// Discard the saved draft. A no-op when none exists.
    fn clear(&self) -> Result<(), AppError>;
}
