//! Metrics collection for sweep operations

/// Counters collected across one run
///
/// Tracks filesystem effects and per-folder outcomes so the end of a run can
/// report what actually happened without re-reading the journal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepMetrics {
    /// Files moved into archive directories
    pub files_archived: usize,

    /// Empty directories deleted
    pub dirs_deleted: usize,

    /// Folders processed (successfully or not)
    pub folders_processed: usize,

    /// Folders on which at least one step failed
    pub folders_failed: usize,
}

impl SweepMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record files archived in one folder
    pub fn record_archived(&mut self, count: usize) {
        self.files_archived += count;
    }

    /// Record directories deleted in one folder
    pub fn record_deleted(&mut self, count: usize) {
        self.dirs_deleted += count;
    }

    /// Record a folder's completion, noting whether any step failed
    pub fn record_folder(&mut self, failed: bool) {
        self.folders_processed += 1;
        if failed {
            self.folders_failed += 1;
        }
    }

    /// Reset all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a one-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "Sweep summary: {} folders processed ({} with errors), {} files archived, {} empty directories deleted",
            self.folders_processed, self.folders_failed, self.files_archived, self.dirs_deleted
        )
    }
}
