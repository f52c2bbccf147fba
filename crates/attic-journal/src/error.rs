//! Error types for journal operations

use thiserror::Error;

/// Errors that can occur while running the activity journal
#[derive(Error, Debug)]
pub enum JournalError {
    /// The journal file could not be opened
    #[error("Failed to open journal file: {0}")]
    Open(#[from] std::io::Error),

    /// Consumer task error (tokio runtime issues)
    #[error("Journal task error: {0}")]
    Worker(String),
}
