//! Handles for a running set of per-intersection schedulers.

use std::sync::mpsc::Receiver;

use tsc_cycle::{CancelToken, PhaseEvent, SchedulerHandle};
use tsc_output::{OutputResult, OutputWriter};

/// All scheduler threads started by one run, their shared cancel token, and
/// the merged phase-event stream.
///
/// Dropping the set without calling [`shutdown`][Self::shutdown] leaves the
/// threads cycling; the token is the only way to stop them.
pub struct SchedulerSet {
    pub(crate) token: CancelToken,
    pub(crate) handles: Vec<SchedulerHandle>,
    /// Merged stream of phase transitions from every intersection.
    pub events: Receiver<PhaseEvent>,
}

impl std::fmt::Debug for SchedulerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulerSet")
            .field("handles", &self.handles.len())
            .finish_non_exhaustive()
    }
}

impl SchedulerSet {
    /// Number of schedulers started.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Signal every scheduler to stop.  Idempotent; returns immediately.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Cancel and wait for every scheduler thread to exit.
    pub fn shutdown(self) {
        self.token.cancel();
        for handle in self.handles {
            handle.join();
        }
    }

    /// Drain buffered phase events into `writer` without blocking.
    ///
    /// Returns the number of events written.  Call periodically (or once
    /// after [`cancel`][Self::cancel]) to flush the observability stream to
    /// an output backend.
    pub fn drain_events_into<W: OutputWriter>(&self, writer: &mut W) -> OutputResult<usize> {
        let mut written = 0;
        while let Ok(event) = self.events.try_recv() {
            writer.write_phase(&event)?;
            written += 1;
        }
        Ok(written)
    }
}
