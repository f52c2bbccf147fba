//! Relocation of aged files into the per-folder archive

use crate::listing::sorted_entries;
use crate::{SweepConfig, SweepError};
use attic_domain::{ActivityEvent, ActivitySink};
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Move every file older than the configured threshold into the folder's
/// archive subdirectory
///
/// Lists the folder's direct entries (non-recursive, name order) and renames
/// each aged file to `<archive>/<prefix><original name>`, emitting one
/// [`ActivityEvent::FileArchived`] per move. Directory entries are skipped
/// outright, the archive directory among them, which is what makes repeated
/// runs safe: already-archived files are behind a directory boundary and are
/// never reconsidered.
///
/// The first I/O failure aborts the folder; the caller reports it and moves
/// on to the next folder. In dry-run mode nothing is created or renamed but
/// events are still emitted.
///
/// Returns the number of files moved (or that would move, under dry-run).
///
/// # Errors
///
/// - [`SweepError::CreateArchive`] if the archive directory is absent and
///   cannot be created
/// - [`SweepError::List`] if the folder cannot be listed
/// - [`SweepError::Metadata`] if an entry's type or modification time cannot
///   be read
/// - [`SweepError::Rename`] if a move fails; earlier moves are kept
pub fn archive_folder(
    folder: &Path,
    config: &SweepConfig,
    sink: &dyn ActivitySink,
) -> Result<usize, SweepError> {
    let archive_path = folder.join(&config.archive_dir_name);
    if !archive_path.exists() && !config.dry_run {
        fs::create_dir(&archive_path).map_err(|source| SweepError::CreateArchive {
            path: archive_path.clone(),
            source,
        })?;
    }

    let now = SystemTime::now();
    let mut moved = 0usize;

    for entry in sorted_entries(folder)? {
        let file_type = entry.file_type().map_err(|source| SweepError::Metadata {
            path: entry.path(),
            source,
        })?;
        if file_type.is_dir() {
            continue;
        }

        let metadata = entry.metadata().map_err(|source| SweepError::Metadata {
            path: entry.path(),
            source,
        })?;
        let modified = metadata.modified().map_err(|source| SweepError::Metadata {
            path: entry.path(),
            source,
        })?;

        // A modification time in the future counts as age zero.
        let age = now.duration_since(modified).unwrap_or_default();
        if age <= config.age_threshold() {
            continue;
        }

        let mut archived_name = OsString::from(&config.archived_prefix);
        archived_name.push(entry.file_name());
        let from = entry.path();
        let to = archive_path.join(archived_name);

        if !config.dry_run {
            fs::rename(&from, &to).map_err(|source| SweepError::Rename {
                from: from.clone(),
                to: to.clone(),
                source,
            })?;
        }
        sink.record(ActivityEvent::FileArchived { from, to });
        moved += 1;
    }

    Ok(moved)
}
