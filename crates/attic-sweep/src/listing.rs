//! Directory listing shared by the archive and prune steps

use crate::SweepError;
use std::fs;
use std::path::Path;

/// List a directory's direct entries, sorted by file name
///
/// Name order keeps journal output stable across platforms whose raw
/// directory order differs.
pub(crate) fn sorted_entries(path: &Path) -> Result<Vec<fs::DirEntry>, SweepError> {
    let reader = fs::read_dir(path).map_err(|source| SweepError::List {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in reader {
        let entry = entry.map_err(|source| SweepError::List {
            path: path.to_path_buf(),
            source,
        })?;
        entries.push(entry);
    }
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}
