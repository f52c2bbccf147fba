//! Attic Sweep
//!
//! The sweep engine: everything that inspects and mutates the target folders.
//!
//! # Overview
//!
//! A sweep processes folders strictly in plan order, one at a time. For each
//! folder it runs two steps:
//!
//! - **Archive**: files whose modification time is older than the configured
//!   threshold move into the folder's archive subdirectory, renamed with the
//!   configured prefix.
//! - **Prune**: subdirectories that were empty when first listed are deleted,
//!   depth-first. Emptiness is judged on the first listing of each directory,
//!   so a directory emptied by this very pass survives until the next run
//!   (see [`prune_folder`] for the full contract).
//!
//! Every action is reported to an [`ActivitySink`](attic_domain::ActivitySink);
//! the engine itself never touches the journal file.
//!
//! # Error handling
//!
//! A failing step is fatal to that folder's remaining work but never to the
//! run: the [`Sweeper`] records the failure and moves on to the next folder.
//! Only plan loading is allowed to abort everything, and it runs before any
//! folder is touched.
//!
//! # Usage
//!
//! ```no_run
//! use attic_sweep::{load_plan, SweepConfig, Sweeper};
//! # use attic_domain::{ActivityEvent, ActivitySink};
//! # struct Discard;
//! # impl ActivitySink for Discard { fn record(&self, _: ActivityEvent) {} }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let folders = load_plan("folders.txt".as_ref())?;
//! let mut sweeper = Sweeper::new(SweepConfig::default());
//! # let sink = Discard;
//! let metrics = sweeper.sweep(&folders, &sink);
//! println!("{}", metrics.summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod archiver;
mod config;
mod error;
mod listing;
mod metrics;
mod plan;
mod pruner;
mod sweep;

pub use archiver::archive_folder;
pub use config::SweepConfig;
pub use error::SweepError;
pub use metrics::SweepMetrics;
pub use plan::load_plan;
pub use pruner::prune_folder;
pub use sweep::Sweeper;
