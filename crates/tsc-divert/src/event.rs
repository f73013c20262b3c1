//! Diversion observability events.

use tsc_core::IntersectionId;

/// One completed transfer, emitted as a side-channel output; never part of
/// controller state.
#[derive(Debug, Clone, PartialEq)]
pub struct DiversionEvent {
    pub source: IntersectionId,
    pub target: IntersectionId,
    /// Density actually moved, after any cap at the source's remaining load.
    pub amount: f64,
    pub unix_time_secs: i64,
}
