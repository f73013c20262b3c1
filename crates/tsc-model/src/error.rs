//! Model error types.

use thiserror::Error;

use tsc_core::IntersectionId;

/// Errors raised while loading a record set from CSV.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Why a single record was rejected during validation.
///
/// A rejection applies to the offending record only; the rest of the working
/// set continues through the control loop.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("intersection {id}: traffic density {value} is negative")]
    NegativeDensity { id: IntersectionId, value: f64 },

    #[error("intersection {id}: {field} must be a positive duration, got {value}")]
    NonPositiveDuration {
        id: IntersectionId,
        field: &'static str,
        value: f64,
    },

    #[error("intersection {id}: {field} is not a finite number")]
    NonFinite {
        id: IntersectionId,
        field: &'static str,
    },

    #[error("duplicate intersection id {id}")]
    DuplicateId { id: IntersectionId },
}
