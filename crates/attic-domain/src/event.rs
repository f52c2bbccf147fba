//! Activity events - the journal-line vocabulary

use std::fmt;
use std::path::PathBuf;

/// One observable action taken during a sweep
///
/// Every filesystem effect (and every deliberate non-effect worth recording)
/// is described by one event. The `Display` implementation renders the exact
/// line appended to the activity journal, so producers and tests share a
/// single source of truth for the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEvent {
    /// A file older than the age threshold was moved into the archive
    FileArchived {
        /// Original location of the file
        from: PathBuf,
        /// Location inside the archive directory, prefix applied
        to: PathBuf,
    },

    /// The pruner listed a directory's direct entries
    DirectoryVisited {
        /// The directory that was listed
        path: PathBuf,
        /// Number of direct entries in the snapshot listing
        entries: usize,
    },

    /// The pruner passed over a non-directory entry
    EntrySkipped {
        /// The entry that was skipped
        path: PathBuf,
    },

    /// An empty directory was deleted
    DirectoryDeleted {
        /// The directory that was deleted
        path: PathBuf,
    },

    /// A folder's archive or prune step failed and was abandoned
    FolderFailed {
        /// The folder whose processing failed
        path: PathBuf,
        /// Rendered cause of the failure
        reason: String,
    },
}

impl fmt::Display for ActivityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityEvent::FileArchived { from, to } => {
                write!(f, "Moved file: {} to {}", from.display(), to.display())
            }
            ActivityEvent::DirectoryVisited { path, entries } => {
                write!(f, "Visiting folder: {} ({} entries)", path.display(), entries)
            }
            ActivityEvent::EntrySkipped { path } => {
                write!(f, "Skipping file: {}", path.display())
            }
            ActivityEvent::DirectoryDeleted { path } => {
                write!(f, "Deleted empty folder: {}", path.display())
            }
            ActivityEvent::FolderFailed { path, reason } => {
                write!(f, "Error processing folder {}: {}", path.display(), reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_archived_rendering() {
        let event = ActivityEvent::FileArchived {
            from: PathBuf::from("/data/reports/old.txt"),
            to: PathBuf::from("/data/reports/Archive/archived_old.txt"),
        };
        assert_eq!(
            event.to_string(),
            "Moved file: /data/reports/old.txt to /data/reports/Archive/archived_old.txt"
        );
    }

    #[test]
    fn test_directory_events_rendering() {
        let visited = ActivityEvent::DirectoryVisited {
            path: PathBuf::from("/data/reports"),
            entries: 3,
        };
        assert_eq!(visited.to_string(), "Visiting folder: /data/reports (3 entries)");

        let deleted = ActivityEvent::DirectoryDeleted {
            path: PathBuf::from("/data/reports/empty"),
        };
        assert_eq!(deleted.to_string(), "Deleted empty folder: /data/reports/empty");
    }

    #[test]
    fn test_failure_rendering_keeps_reason() {
        let event = ActivityEvent::FolderFailed {
            path: PathBuf::from("/data/gone"),
            reason: "listing failed".to_string(),
        };
        assert_eq!(
            event.to_string(),
            "Error processing folder /data/gone: listing failed"
        );
    }
}
