//! `tsc-divert` — redistribution of density from congested intersections.
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`engine`] | `DiversionEngine`                         |
//! | [`event`]  | `DiversionEvent` observability record     |
//! | [`error`]  | `DiversionError`                          |

pub mod engine;
pub mod error;
pub mod event;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::{DEFAULT_THRESHOLD, DEFAULT_TRANSFER_RANGE, DiversionEngine};
pub use error::DiversionError;
pub use event::DiversionEvent;
