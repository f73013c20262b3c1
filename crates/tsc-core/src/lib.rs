//! `tsc-core` — foundational types for the `rust_tsc` signal control framework.
//!
//! This crate is a dependency of every other `tsc-*` crate.  It intentionally
//! has no `tsc-*` dependencies and minimal external ones (only `rand`).
//!
//! # What lives here
//!
//! | Module    | Contents                                  |
//! |-----------|-------------------------------------------|
//! | [`ids`]   | `IntersectionId`                          |
//! | [`phase`] | `Phase` (green/yellow/red state machine)  |
//! | [`rng`]   | `ControlRng` (seedable run-level RNG)     |
//! | [`time`]  | `unix_now_secs` event-timestamp helper    |

pub mod ids;
pub mod phase;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::IntersectionId;
pub use phase::Phase;
pub use rng::ControlRng;
pub use time::unix_now_secs;
