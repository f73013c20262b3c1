//! `tsc-cycle` — the per-intersection phase scheduler.
//!
//! Every intersection runs an unbounded GREEN→YELLOW→RED cycle on its own
//! thread.  The crate provides the cycle itself, the read-only timings
//! snapshot handed to it, the cancellation token that stops a whole run, and
//! the phase-transition event stream.
//!
//! | Module        | Contents                               |
//! |---------------|----------------------------------------|
//! | [`cancel`]    | `CancelToken`                          |
//! | [`timings`]   | `PhaseTimings`                         |
//! | [`event`]     | `PhaseEvent`                           |
//! | [`scheduler`] | `spawn`, `SchedulerHandle`             |
//! | [`error`]     | `CycleError`                           |

pub mod cancel;
pub mod error;
pub mod event;
pub mod scheduler;
pub mod timings;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cancel::CancelToken;
pub use error::CycleError;
pub use event::PhaseEvent;
pub use scheduler::{SchedulerHandle, spawn};
pub use timings::PhaseTimings;
