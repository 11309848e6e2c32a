//! Shared testing utilities for provision CLI tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use provision::domain::Snapshot;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `provision` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("provision").expect("Failed to locate provision binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to the saved draft file in the work directory.
    pub fn draft_path(&self) -> PathBuf {
        self.work_dir.join(".provision").join("draft.json")
    }

    /// Write a snapshot to the draft location, as the wizard would.
    pub fn seed_draft(&self, snapshot: &Snapshot) {
        let dir = self.work_dir.join(".provision");
        fs::create_dir_all(&dir).expect("Failed to create draft directory");
        let json = serde_json::to_string_pretty(snapshot).expect("Failed to serialize draft");
        fs::write(self.draft_path(), json).expect("Failed to write draft");
    }

    /// Execute a closure after temporarily switching into the work
    /// directory. The working directory is process-wide; callers run
    /// under `#[serial]`.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(&self.work_dir).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }

    /// A named draft with one equipped station, ready for submission.
    pub fn named_snapshot(name: &str) -> Snapshot {
        let mut snapshot = Snapshot::new();
        snapshot.customer_name = name.to_string();
        snapshot.stations[0].has_pos = true;
        snapshot
    }
}
