//! CLI definition and argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Attic - relocate aged files into per-folder archives and prune empty
/// directories.
#[derive(Debug, Parser)]
#[command(name = "attic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Plan file listing one folder per line
    #[arg(short, long, value_name = "FILE", default_value = "folders.txt")]
    pub folders: PathBuf,

    /// Activity journal file (appended to, created if absent)
    #[arg(short, long, value_name = "FILE", default_value = "attic.log")]
    pub log_file: PathBuf,

    /// TOML settings file overriding the built-in sweep defaults
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Override the age threshold, in days
    #[arg(long, value_name = "DAYS")]
    pub age_days: Option<u64>,

    /// Journal what would change without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}
