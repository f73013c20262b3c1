//! Control-loop error types.

use thiserror::Error;

use tsc_cycle::CycleError;
use tsc_model::{IntersectionRecord, ValidationError};
use tsc_output::OutputError;
use tsc_policy::PolicyError;

/// Why a record was dropped from a run.
#[derive(Debug, Error, Clone)]
pub enum RejectReason {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// A record dropped from the run, with the reason it was dropped.
///
/// Dropping one record never aborts the rest of the run; the survivors
/// continue through diversion, persistence, and scheduling.
#[derive(Debug, Clone)]
pub struct RejectedRecord {
    pub record: IntersectionRecord,
    pub reason: RejectReason,
}

/// Errors fatal to a whole run.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("control configuration error: {0}")]
    Config(String),

    #[error("all {rejected} ingested records failed validation")]
    NoValidRecords { rejected: usize },

    #[error("output error: {0}")]
    Output(#[from] OutputError),

    #[error("scheduler error: {0}")]
    Cycle(#[from] CycleError),
}

/// Alias for `Result<T, ControlError>`.
pub type ControlResult<T> = Result<T, ControlError>;
