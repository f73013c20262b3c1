use thiserror::Error;

/// Invalid diversion configuration.
///
/// An undersized working set is not an error — diversion over fewer than two
/// records is a documented no-op.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DiversionError {
    #[error("diversion threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),

    #[error("transfer range [{min}, {max}] is empty or zero")]
    InvalidTransferRange { min: u32, max: u32 },
}
