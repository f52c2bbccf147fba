//! Plan loading - the ordered list of folders to sweep

use crate::SweepError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Read the plan file: one folder path per line, file order preserved
///
/// The whole file is read before any folder is processed, so a bad plan
/// aborts the run with nothing touched. Blank lines are skipped; every other
/// line is taken verbatim.
///
/// # Errors
///
/// Returns [`SweepError::Plan`] if the file cannot be opened or a line
/// cannot be read.
pub fn load_plan(path: &Path) -> Result<Vec<PathBuf>, SweepError> {
    let file = File::open(path).map_err(|source| SweepError::Plan {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut folders = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| SweepError::Plan {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Read plan line: {}", line);
        if line.is_empty() {
            continue;
        }
        folders.push(PathBuf::from(line));
    }

    tracing::info!("Read {} folders from plan {}", folders.len(), path.display());
    Ok(folders)
}
