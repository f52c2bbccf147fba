//! Error types for sweep operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the plan or sweeping a folder
///
/// Every variant carries the path it failed on; per-folder variants are
/// reported and absorbed by the [`Sweeper`](crate::Sweeper) so one bad
/// folder cannot stop the run.
#[derive(Error, Debug)]
pub enum SweepError {
    /// The plan file could not be opened or read
    #[error("Failed to read plan file {}: {source}", .path.display())]
    Plan {
        /// Path of the plan file
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The archive subdirectory could not be created
    #[error("Failed to create archive directory {}: {source}", .path.display())]
    CreateArchive {
        /// Path of the archive directory
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// A directory listing failed
    #[error("Failed to list {}: {source}", .path.display())]
    List {
        /// Directory whose listing failed
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Entry metadata (type or modification time) could not be read
    #[error("Failed to read metadata for {}: {source}", .path.display())]
    Metadata {
        /// Entry whose metadata was unreadable
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// An aged file could not be moved into the archive
    #[error("Failed to move {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        /// Original location
        from: PathBuf,
        /// Intended archive location
        to: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// An empty directory could not be deleted
    #[error("Failed to delete directory {}: {source}", .path.display())]
    Remove {
        /// Directory whose deletion failed
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}
