//! `tsc-policy` — the per-intersection signal timing policy.
//!
//! A pure control law: given one record's measured density, split a fixed
//! green+red cycle budget so the green share scales with load.  No I/O, no
//! randomness, no cross-record state.

pub mod error;
pub mod timing;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::PolicyError;
pub use timing::{CYCLE_SECS, DENSITY_REFERENCE, GREEN_MAX_SECS, GREEN_MIN_SECS, TimingPolicy};
