//! Configuration for sweep operations
//!
//! Holds the knobs the original tool hard-coded: the age threshold, the
//! archive directory name, and the relocation prefix.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a sweep pass
///
/// Can be deserialized from TOML:
///
/// ```toml
/// age_threshold_hours = 2160
/// archive_dir_name = "Archive"
/// archived_prefix = "archived_"
/// dry_run = false
/// ```
///
/// # Examples
///
/// ```
/// use attic_sweep::SweepConfig;
///
/// let config = SweepConfig::default();
/// assert_eq!(config.age_threshold_hours, 2160);
/// assert_eq!(config.archive_dir_name, "Archive");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Files whose modification time is older than this are archived (in hours)
    /// Default: 2160 hours (90 days)
    #[serde(default = "default_age_threshold_hours")]
    pub age_threshold_hours: u64,

    /// Name of the per-folder archive subdirectory
    /// Default: "Archive"
    #[serde(default = "default_archive_dir_name")]
    pub archive_dir_name: String,

    /// Prefix prepended to file names on relocation
    /// Default: "archived_"
    #[serde(default = "default_archived_prefix")]
    pub archived_prefix: String,

    /// Dry-run mode: journal what would be moved or deleted without touching
    /// the filesystem
    /// Default: false
    #[serde(default)]
    pub dry_run: bool,
}

fn default_age_threshold_hours() -> u64 {
    // 90 days, the threshold the original tool compiled in
    24 * 30 * 3
}

fn default_archive_dir_name() -> String {
    "Archive".to_string()
}

fn default_archived_prefix() -> String {
    "archived_".to_string()
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            age_threshold_hours: default_age_threshold_hours(),
            archive_dir_name: default_archive_dir_name(),
            archived_prefix: default_archived_prefix(),
            dry_run: false,
        }
    }
}

impl SweepConfig {
    /// Get the age threshold as a Duration
    pub fn age_threshold(&self) -> Duration {
        Duration::from_secs(self.age_threshold_hours * 3600)
    }
}
