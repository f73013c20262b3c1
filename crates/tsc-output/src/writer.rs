//! The `OutputWriter` trait implemented by all backend writers.

use tsc_cycle::PhaseEvent;
use tsc_divert::DiversionEvent;
use tsc_model::IntersectionRecord;

use crate::OutputResult;

/// Sink for everything one control-loop run externalizes: the final record
/// set plus the two observability event streams.
pub trait OutputWriter {
    /// Persist the record set, in ingestion order.
    fn write_records(&mut self, records: &[IntersectionRecord]) -> OutputResult<()>;

    /// Append one diversion event.
    fn write_diversion(&mut self, event: &DiversionEvent) -> OutputResult<()>;

    /// Append one phase-transition event.
    fn write_phase(&mut self, event: &PhaseEvent) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
