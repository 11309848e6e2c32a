use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, Snapshot};
use crate::ports::DraftStore;

/// Directory holding provision state under the working directory.
pub const PROVISION_DIR: &str = ".provision";
const DRAFT_FILE: &str = "draft.json";

/// Filesystem-backed draft store.
#[derive(Debug, Clone)]
pub struct FilesystemDraftStore {
    root: PathBuf,
}

impl FilesystemDraftStore {
    /// Create a draft store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a draft store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn draft_path(&self) -> PathBuf {
        self.root.join(PROVISION_DIR).join(DRAFT_FILE)
    }
}

impl DraftStore for FilesystemDraftStore {
    fn exists(&self) -> bool {
        self.draft_path().exists()
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), AppError> {
        fs::create_dir_all(self.root.join(PROVISION_DIR))?;
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| AppError::MalformedDraft(e.to_string()))?;
        fs::write(self.draft_path(), json)?;
        Ok(())
    }

    fn load(&self) -> Result<Snapshot, AppError> {
        let path = self.draft_path();
        if !path.exists() {
            return Err(AppError::DraftNotFound);
        }
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| AppError::MalformedDraft(e.to_string()))
    }

    fn clear(&self) -> Result<(), AppError> {
        let path = self.draft_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
