//! Integration tests for attic-sweep
//!
//! These tests drive full sweeps over real temporary directory trees and
//! verify filesystem effects, event ordering, and metrics together.

use attic_domain::{ActivityEvent, ActivitySink};
use attic_sweep::Sweeper;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

struct RecordingSink(Mutex<Vec<ActivityEvent>>);

impl RecordingSink {
    fn new() -> Self {
        Self(Mutex::new(Vec::new()))
    }

    fn events(&self) -> Vec<ActivityEvent> {
        self.0.lock().unwrap().clone()
    }
}

impl ActivitySink for RecordingSink {
    fn record(&self, event: ActivityEvent) {
        self.0.lock().unwrap().push(event);
    }
}

fn backdate(path: &Path, days: u64) {
    let mtime = SystemTime::now() - Duration::from_secs(days * 86_400);
    let file = fs::OpenOptions::new().write(true).open(path).unwrap();
    file.set_modified(mtime).unwrap();
}

#[test]
fn test_archive_step_precedes_prune_step_in_event_order() {
    let dir = tempfile::tempdir().unwrap();
    let old = dir.path().join("old.txt");
    fs::write(&old, "stale").unwrap();
    backdate(&old, 100);
    fs::create_dir(dir.path().join("empty")).unwrap();

    let sink = RecordingSink::new();
    let mut sweeper = Sweeper::default_config();
    sweeper.sweep_folder(dir.path(), &sink);

    let events = sink.events();
    let moved_at = events
        .iter()
        .position(|e| matches!(e, ActivityEvent::FileArchived { .. }))
        .expect("A move event should be recorded");
    let deleted_at = events
        .iter()
        .position(|e| matches!(e, ActivityEvent::DirectoryDeleted { .. }))
        .expect("A deletion event should be recorded");
    assert!(
        moved_at < deleted_at,
        "Archiving runs before pruning within a folder"
    );
}

#[test]
fn test_folders_are_swept_in_plan_order() {
    let root = tempfile::tempdir().unwrap();
    let first = root.path().join("first");
    let second = root.path().join("second");
    fs::create_dir(&first).unwrap();
    fs::create_dir(&second).unwrap();
    fs::create_dir(first.join("empty_a")).unwrap();
    fs::create_dir(second.join("empty_b")).unwrap();

    let sink = RecordingSink::new();
    let mut sweeper = Sweeper::default_config();
    let metrics = sweeper.sweep(&[second.clone(), first.clone()], &sink);

    assert_eq!(metrics.folders_processed, 2);
    assert_eq!(metrics.dirs_deleted, 2);

    // All of the second folder's events come before any of the first's.
    let events = sink.events();
    let last_of_second = events
        .iter()
        .rposition(|e| matches!(e, ActivityEvent::DirectoryDeleted { path } if path.starts_with(&second)))
        .unwrap();
    let first_of_first = events
        .iter()
        .position(|e| matches!(e, ActivityEvent::DirectoryVisited { path, .. } if path.starts_with(&first)))
        .unwrap();
    assert!(last_of_second < first_of_first);
}

#[test]
fn test_sweep_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let old = dir.path().join("old.txt");
    fs::write(&old, "stale").unwrap();
    backdate(&old, 100);
    fs::create_dir(dir.path().join("empty")).unwrap();

    let sink = RecordingSink::new();
    let mut sweeper = Sweeper::default_config();
    sweeper.sweep_folder(dir.path(), &sink);

    let archived = dir.path().join("Archive").join("archived_old.txt");
    assert!(archived.exists());

    // Second run: nothing further moves, nothing errors. The archived copy
    // sits behind the archive directory boundary and is never reconsidered.
    let sink = RecordingSink::new();
    let mut sweeper = Sweeper::default_config();
    let metrics = sweeper.sweep(&[dir.path().to_path_buf()], &sink);

    assert_eq!(metrics.files_archived, 0);
    assert_eq!(metrics.folders_failed, 0);
    assert!(archived.exists());
    assert!(!sink
        .events()
        .iter()
        .any(|e| matches!(e, ActivityEvent::FileArchived { .. })));
}

#[test]
fn test_failed_folder_does_not_stop_the_run() {
    let root = tempfile::tempdir().unwrap();
    let good = root.path().join("good");
    fs::create_dir(&good).unwrap();
    fs::create_dir(good.join("empty")).unwrap();
    let missing = root.path().join("missing");

    let sink = RecordingSink::new();
    let mut sweeper = Sweeper::default_config();
    let metrics = sweeper.sweep(&[missing.clone(), good.clone()], &sink);

    assert_eq!(metrics.folders_processed, 2);
    assert_eq!(metrics.folders_failed, 1);
    assert_eq!(metrics.dirs_deleted, 1);
    assert!(!good.join("empty").exists());

    // The missing folder produced failure events for both steps.
    let failures: Vec<_> = sink
        .events()
        .into_iter()
        .filter(|e| matches!(e, ActivityEvent::FolderFailed { path, .. } if *path == missing))
        .collect();
    assert_eq!(failures.len(), 2);
}

#[test]
fn test_metrics_match_filesystem_effects() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["a.log", "b.log", "c.log"] {
        let path = dir.path().join(name);
        fs::write(&path, "x").unwrap();
        backdate(&path, 365);
    }
    fs::write(dir.path().join("fresh.log"), "x").unwrap();
    fs::create_dir(dir.path().join("empty_one")).unwrap();
    fs::create_dir(dir.path().join("empty_two")).unwrap();

    let sink = RecordingSink::new();
    let mut sweeper = Sweeper::default_config();
    let metrics = sweeper.sweep(&[dir.path().to_path_buf()], &sink);

    assert_eq!(metrics.files_archived, 3);
    assert_eq!(metrics.dirs_deleted, 2);
    assert_eq!(metrics.folders_processed, 1);
    assert_eq!(metrics.folders_failed, 0);

    let archive = dir.path().join("Archive");
    assert_eq!(fs::read_dir(&archive).unwrap().count(), 3);
    assert!(!dir.path().join("empty_one").exists());
    assert!(!dir.path().join("empty_two").exists());
    assert!(dir.path().join("fresh.log").exists());
}

#[test]
fn test_archive_failure_still_prunes() {
    let dir = tempfile::tempdir().unwrap();
    // Occupy the archive name with a file: the existence check passes, so
    // the failure surfaces at the first rename into it.
    fs::write(dir.path().join("Archive"), "not a directory").unwrap();
    let old = dir.path().join("old.txt");
    fs::write(&old, "stale").unwrap();
    backdate(&old, 100);
    fs::create_dir(dir.path().join("empty")).unwrap();

    let sink = RecordingSink::new();
    let mut sweeper = Sweeper::default_config();
    sweeper.sweep_folder(dir.path(), &sink);

    assert_eq!(sweeper.metrics().folders_failed, 1);
    assert!(old.exists(), "The failed move leaves the file in place");
    assert!(
        !dir.path().join("empty").exists(),
        "The prune step runs even when archiving failed"
    );
}
