//! The journal consumer and its producer-side handle

use crate::JournalError;
use attic_domain::{ActivityEvent, ActivitySink};
use std::path::Path;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Entry point for starting the activity journal
///
/// See the crate docs for the lifecycle; [`ActivityJournal::open`] is the
/// only constructor.
pub struct ActivityJournal;

impl ActivityJournal {
    /// Open the journal file and start the consumer task
    ///
    /// The file is opened in append mode and created if absent. Returns the
    /// producer-side [`JournalWriter`] and the [`JournalTask`] used to await
    /// the consumer during shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Open`] if the journal file cannot be opened.
    /// Nothing is spawned in that case.
    pub async fn open<P: AsRef<Path>>(
        path: P,
    ) -> Result<(JournalWriter, JournalTask), JournalError> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path.as_ref())
            .await?;

        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(drain(file, rx));

        Ok((JournalWriter { tx }, JournalTask { handle }))
    }
}

/// Consume events until every writer is gone, then flush
///
/// Returns the number of lines successfully written.
async fn drain(mut file: File, mut rx: mpsc::UnboundedReceiver<ActivityEvent>) -> usize {
    let mut written = 0usize;

    while let Some(event) = rx.recv().await {
        let line = format!("{event}\n");
        match file.write_all(line.as_bytes()).await {
            Ok(()) => written += 1,
            Err(e) => {
                // Keep draining; later events may still land.
                tracing::error!("Failed to write journal line: {}", e);
            }
        }
    }

    if let Err(e) = file.flush().await {
        tracing::error!("Failed to flush journal: {}", e);
    }

    written
}

/// Cloneable producer handle for the journal
///
/// Dropping the last clone closes the channel and lets the consumer finish.
#[derive(Clone)]
pub struct JournalWriter {
    tx: mpsc::UnboundedSender<ActivityEvent>,
}

impl ActivitySink for JournalWriter {
    fn record(&self, event: ActivityEvent) {
        // The receiver only disappears once shutdown has begun, so a failed
        // send means the event raced the end of the run.
        if self.tx.send(event).is_err() {
            tracing::warn!("Activity event dropped after journal shutdown");
        }
    }
}

/// Handle used to await the consumer during shutdown
pub struct JournalTask {
    handle: JoinHandle<usize>,
}

impl JournalTask {
    /// Wait for the consumer to drain the channel and flush the file
    ///
    /// Resolves once every [`JournalWriter`] has been dropped and the
    /// remaining events are on disk. Returns the number of lines written.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Worker`] if the consumer task panicked or was
    /// cancelled.
    pub async fn finish(self) -> Result<usize, JournalError> {
        self.handle
            .await
            .map_err(|e| JournalError::Worker(e.to_string()))
    }
}
