//! Attic Journal
//!
//! Append-only activity journal with a single background consumer.
//!
//! # Overview
//!
//! The journal is the product artifact of a sweep: one line per recorded
//! event, in the exact order the events were emitted, across all folders.
//! Producers hand events to a cloneable [`JournalWriter`] (the
//! [`ActivitySink`](attic_domain::ActivitySink) implementation); a single
//! tokio task drains them into the journal file.
//!
//! # Architecture
//!
//! - The journal file is opened in append mode (created if absent) *before*
//!   the consumer starts, so an unopenable journal fails the run up front
//!   instead of leaving producers talking to nobody.
//! - The channel is unbounded: recording never blocks the sweep.
//! - A write failure is reported and draining continues; one bad line does
//!   not cost the rest of the journal.
//! - Shutdown is a handshake: dropping every writer closes the channel, the
//!   consumer flushes and exits, and [`JournalTask::finish`] resolves.
//!
//! # Usage
//!
//! ```no_run
//! use attic_domain::{ActivityEvent, ActivitySink};
//! use attic_journal::ActivityJournal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (writer, task) = ActivityJournal::open("attic.log").await?;
//!
//!     writer.record(ActivityEvent::DirectoryDeleted {
//!         path: "/data/reports/empty".into(),
//!     });
//!
//!     drop(writer);
//!     let lines = task.finish().await?;
//!     println!("journal closed after {lines} lines");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod error;
mod journal;

pub use error::JournalError;
pub use journal::{ActivityJournal, JournalTask, JournalWriter};
