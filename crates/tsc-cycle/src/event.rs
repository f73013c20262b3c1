//! Phase-transition observability events.

use tsc_core::{IntersectionId, Phase};

/// Emitted by a scheduler on entering each phase.
///
/// The event stream is the scheduler's only externally visible output; it
/// holds no other observable state.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseEvent {
    pub intersection: IntersectionId,
    pub phase: Phase,
    pub unix_time_secs: i64,
}
