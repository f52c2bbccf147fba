//! Attic CLI library.
//!
//! This library provides the `attic` binary's working parts: argument
//! parsing, settings resolution, and the orchestration of one maintenance
//! run (plan load, journal start, per-folder sweep, journal shutdown).

pub mod app;
pub mod cli;
pub mod error;

pub use app::run;
pub use cli::Cli;
pub use error::{CliError, Result};
