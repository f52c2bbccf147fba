//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
///
/// Everything here is fatal to the run: per-folder problems never reach this
/// type, they are absorbed by the sweep engine and reported in the journal.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings file error
    #[error("Settings error: {0}")]
    Settings(String),

    /// Sweep engine error (plan loading)
    #[error("Sweep error: {0}")]
    Sweep(#[from] attic_sweep::SweepError),

    /// Journal error
    #[error("Journal error: {0}")]
    Journal(#[from] attic_journal::JournalError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
