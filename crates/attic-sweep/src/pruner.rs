//! Bottom-up removal of empty directories

use crate::listing::sorted_entries;
use crate::{SweepConfig, SweepError};
use attic_domain::{ActivityEvent, ActivitySink};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// One directory being walked
///
/// Listed exactly once, on first visit; `snapshot_len` is the entry count of
/// that listing and is what emptiness is judged on.
struct Frame {
    path: PathBuf,
    snapshot_len: usize,
    /// Subdirectories still to resolve, ordered so `pop()` yields name order
    pending: Vec<PathBuf>,
    root: bool,
}

impl Frame {
    fn open(
        path: PathBuf,
        root: bool,
        config: &SweepConfig,
        sink: &dyn ActivitySink,
    ) -> Result<Self, SweepError> {
        let entries = sorted_entries(&path)?;
        sink.record(ActivityEvent::DirectoryVisited {
            path: path.clone(),
            entries: entries.len(),
        });

        let mut pending = Vec::new();
        for entry in &entries {
            let file_type = entry.file_type().map_err(|source| SweepError::Metadata {
                path: entry.path(),
                source,
            })?;
            if !file_type.is_dir() {
                sink.record(ActivityEvent::EntrySkipped { path: entry.path() });
                continue;
            }
            // Archive directories are containers this tool owns: never
            // traversed, never deleted, even when empty.
            if entry.file_name().as_os_str() == OsStr::new(config.archive_dir_name.as_str()) {
                continue;
            }
            pending.push(entry.path());
        }
        pending.reverse();

        Ok(Self {
            path,
            snapshot_len: entries.len(),
            pending,
            root,
        })
    }
}

/// Delete empty subdirectories of `folder`, depth-first, post-order
///
/// Each directory is listed once, when first visited, and that snapshot is
/// what decides its fate after its children resolve: deleted if the snapshot
/// had zero entries, kept otherwise. A directory emptied by this very pass
/// therefore survives until the next run; chains of nested empty directories
/// shrink by one level per pass, leaf first. The folder itself is never a
/// deletion candidate, and neither is any directory carrying the archive
/// name.
///
/// Failures below the root (an unlistable child, a deletion that fails) are
/// reported to the sink and via tracing, and sibling processing continues.
/// In dry-run mode deletions are journaled but not performed.
///
/// Returns the number of directories deleted (or that would be, under
/// dry-run).
///
/// # Errors
///
/// Returns [`SweepError::List`] or [`SweepError::Metadata`] only for the
/// root folder itself; everything deeper is absorbed after being reported.
pub fn prune_folder(
    folder: &Path,
    config: &SweepConfig,
    sink: &dyn ActivitySink,
) -> Result<usize, SweepError> {
    let mut deleted = 0usize;
    let mut stack = vec![Frame::open(folder.to_path_buf(), true, config, sink)?];

    while let Some(mut frame) = stack.pop() {
        if let Some(child) = frame.pending.pop() {
            stack.push(frame);
            match Frame::open(child.clone(), false, config, sink) {
                Ok(child_frame) => stack.push(child_frame),
                Err(e) => {
                    tracing::warn!("Skipping unprunable directory {}: {}", child.display(), e);
                    sink.record(ActivityEvent::FolderFailed {
                        path: child,
                        reason: e.to_string(),
                    });
                }
            }
            continue;
        }

        // All children resolved; judge this directory on its snapshot.
        if frame.root || frame.snapshot_len > 0 {
            continue;
        }

        if config.dry_run {
            deleted += 1;
            sink.record(ActivityEvent::DirectoryDeleted { path: frame.path });
            continue;
        }

        match fs::remove_dir(&frame.path) {
            Ok(()) => {
                deleted += 1;
                sink.record(ActivityEvent::DirectoryDeleted { path: frame.path });
            }
            Err(source) => {
                let e = SweepError::Remove {
                    path: frame.path.clone(),
                    source,
                };
                tracing::warn!("{}", e);
                sink.record(ActivityEvent::FolderFailed {
                    path: frame.path,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(deleted)
}
