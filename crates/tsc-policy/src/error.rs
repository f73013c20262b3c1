use thiserror::Error;

use tsc_core::IntersectionId;

/// Rejection of a single record by the timing policy.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    #[error("intersection {id}: cannot derive timings from density {value}")]
    InvalidDensity { id: IntersectionId, value: f64 },
}
