//! Per-folder sweep driver

use crate::{archive_folder, prune_folder, SweepConfig, SweepMetrics};
use attic_domain::{ActivityEvent, ActivitySink};
use std::path::{Path, PathBuf};

/// Drives the archive and prune steps across folders, absorbing per-folder
/// failures
///
/// Folders are processed strictly one at a time, in the order given; there
/// is no cross-folder parallelism, so journal ordering mirrors plan
/// ordering. A step failure is journaled and counted, and never stops later
/// folders, nor (in the archive step's case) that folder's own prune step.
///
/// # Examples
///
/// ```no_run
/// use attic_sweep::{SweepConfig, Sweeper};
/// # use attic_domain::{ActivityEvent, ActivitySink};
/// # struct Discard;
/// # impl ActivitySink for Discard { fn record(&self, _: ActivityEvent) {} }
/// # let sink = Discard;
///
/// let mut sweeper = Sweeper::new(SweepConfig::default());
/// let metrics = sweeper.sweep(&["/data/reports".into()], &sink);
/// println!("{}", metrics.summary());
/// ```
pub struct Sweeper {
    config: SweepConfig,
    metrics: SweepMetrics,
}

impl Sweeper {
    /// Create a new sweeper with the given configuration
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            metrics: SweepMetrics::new(),
        }
    }

    /// Create a sweeper with default configuration
    pub fn default_config() -> Self {
        Self::new(SweepConfig::default())
    }

    /// Get the active configuration
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &SweepMetrics {
        &self.metrics
    }

    /// Reset the metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Sweep every folder in order and return the accumulated metrics
    pub fn sweep(&mut self, folders: &[PathBuf], sink: &dyn ActivitySink) -> SweepMetrics {
        for folder in folders {
            self.sweep_folder(folder, sink);
        }
        self.metrics.clone()
    }

    /// Run the archive step, then the prune step, for one folder
    ///
    /// The prune step runs even when archiving failed: a folder that cannot
    /// take new archive entries can still lose its empty subdirectories.
    pub fn sweep_folder(&mut self, folder: &Path, sink: &dyn ActivitySink) {
        tracing::info!("Processing folder {}", folder.display());
        let mut failed = false;

        match archive_folder(folder, &self.config, sink) {
            Ok(moved) => {
                tracing::debug!("Archived {} files in {}", moved, folder.display());
                self.metrics.record_archived(moved);
            }
            Err(e) => {
                failed = true;
                tracing::error!("Archive step failed for {}: {}", folder.display(), e);
                sink.record(ActivityEvent::FolderFailed {
                    path: folder.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }

        match prune_folder(folder, &self.config, sink) {
            Ok(deleted) => {
                tracing::debug!("Deleted {} empty directories in {}", deleted, folder.display());
                self.metrics.record_deleted(deleted);
            }
            Err(e) => {
                failed = true;
                tracing::error!("Prune step failed for {}: {}", folder.display(), e);
                sink.record(ActivityEvent::FolderFailed {
                    path: folder.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }

        self.metrics.record_folder(failed);
    }
}
