//! `tsc-control` — the control-loop orchestrator.
//!
//! One run sequences: validate → timing policy → diversion → persist →
//! optionally start one phase scheduler per intersection.  Records are
//! loaded externally (see `tsc_model::load_records_csv`) and handed in; the
//! orchestrator owns the working set exclusively through the mutating
//! phases, and schedulers only ever receive read-only timing snapshots.
//!
//! | Module         | Contents                                        |
//! |----------------|-------------------------------------------------|
//! | [`config`]     | `ControlConfig`, `RunMode`                      |
//! | [`controller`] | `Controller`, `RunReport`                       |
//! | [`schedulers`] | `SchedulerSet`                                  |
//! | [`error`]      | `ControlError`, `RejectedRecord`                |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Apply the timing policy on Rayon's thread pool.   |

pub mod config;
pub mod controller;
pub mod error;
pub mod schedulers;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ControlConfig, RunMode};
pub use controller::{Controller, RunReport};
pub use error::{ControlError, ControlResult, RejectReason, RejectedRecord};
pub use schedulers::SchedulerSet;
