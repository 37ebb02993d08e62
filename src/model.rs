use std::path::PathBuf;

/// Execution mode shared by the real reclaim path and the zero-risk preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Enumerate and classify only; nothing is removed.
    DryRun,
    /// Permanently delete every enumerated entry.
    Delete,
}

/// One entry that could not be removed (permission denied, vanished
/// mid-scan, in use). Collected instead of aborting the batch.
#[derive(Debug, Clone)]
pub struct EntryFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of running one cache target. Created fresh per invocation and
/// owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct ReclaimResult {
    /// Immediate entries removed across all resolved directories. A
    /// directory removed recursively counts as exactly one item.
    pub items_deleted: u64,
    /// Recursive size of everything removed, measured before deletion.
    pub bytes_reclaimed: u64,
    /// Resolved directories that did not exist. Skipped, not an error.
    pub directories_missing: Vec<PathBuf>,
    pub failures: Vec<EntryFailure>,
}

/// Outcome of the ad-hoc single-folder delete.
#[derive(Debug, Clone)]
pub struct DeleteOutcome {
    pub success: bool,
    pub message: String,
}
