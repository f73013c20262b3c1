//! Thread-per-intersection phase scheduling.
//!
//! Each intersection cycles on its own named OS thread.  The only suspension
//! point is the timed hold within a phase, and the hold happens on that
//! thread alone, so one intersection's wait never delays another's
//! transition.  Threads share nothing but the cancel token and the event
//! sender.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use tracing::trace;

use tsc_core::{IntersectionId, Phase, unix_now_secs};

use crate::cancel::CancelToken;
use crate::error::CycleError;
use crate::event::PhaseEvent;
use crate::timings::PhaseTimings;

/// Handle to one running scheduler thread.
pub struct SchedulerHandle {
    id: IntersectionId,
    join: JoinHandle<()>,
}

impl SchedulerHandle {
    pub fn id(&self) -> &IntersectionId {
        &self.id
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the scheduler thread to exit.
    ///
    /// Cancel its token first; an uncancelled scheduler never returns.
    pub fn join(self) {
        let _ = self.join.join();
    }
}

/// Spawn the repeating GREEN→YELLOW→RED cycle for one intersection.
///
/// The cycle starts at GREEN and emits a [`PhaseEvent`] on entering each
/// phase.  Durations are fixed for the lifetime of the scheduler; transitions
/// are timer-driven only, with no external preemption.  The token is checked
/// at every phase boundary and also interrupts a hold in progress, so a
/// cancelled run stops promptly.  A disconnected event receiver never
/// disturbs the cycle.
pub fn spawn(
    id: IntersectionId,
    timings: PhaseTimings,
    token: CancelToken,
    events: Sender<PhaseEvent>,
) -> Result<SchedulerHandle, CycleError> {
    let thread_id = id.clone();
    let join = thread::Builder::new()
        .name(format!("cycle-{id}"))
        .spawn(move || run_cycle(thread_id, timings, token, events))
        .map_err(|source| CycleError::Spawn {
            id: id.clone(),
            source,
        })?;
    Ok(SchedulerHandle { id, join })
}

fn run_cycle(
    id: IntersectionId,
    timings: PhaseTimings,
    token: CancelToken,
    events: Sender<PhaseEvent>,
) {
    let mut phase = Phase::Green;
    loop {
        if token.is_cancelled() {
            break;
        }

        // Observability only: a dropped receiver must not stop the lights.
        let _ = events.send(PhaseEvent {
            intersection: id.clone(),
            phase,
            unix_time_secs: unix_now_secs(),
        });
        trace!(intersection = %id, %phase, "entered phase");

        if token.wait_for(timings.hold(phase)) {
            break;
        }
        phase = phase.next();
    }
    trace!(intersection = %id, "scheduler stopped");
}
