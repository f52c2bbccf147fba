//! Trait definitions for external interactions
//!
//! These traits define the boundary between the sweep engine and the
//! infrastructure that records its activity. Implementations live in other
//! crates.

use crate::ActivityEvent;

/// Destination for activity events
///
/// Implemented by the infrastructure layer (attic-journal). Recording is
/// fire-and-forget from the producer's point of view: it never blocks and
/// never fails. An implementation that can no longer deliver events is
/// expected to report that on its own side rather than back-pressure the
/// sweep.
pub trait ActivitySink {
    /// Record a single event
    fn record(&self, event: ActivityEvent);
}
