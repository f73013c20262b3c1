//! `tsc-output` — persistence and event-log writers.
//!
//! One backend is provided: CSV, creating three files in the configured
//! output directory.
//!
//! | File                        | Contents                                 |
//! |-----------------------------|------------------------------------------|
//! | `final_traffic_density.csv` | Persisted record set, re-ingestable      |
//! | `diversion_events.csv`      | One row per completed transfer           |
//! | `phase_transitions.csv`     | One row per phase entry per intersection |
//!
//! All backends implement [`OutputWriter`]; the trait is the seam for
//! alternative sinks (databases, message buses, test doubles).

pub mod csv;
pub mod error;
pub mod writer;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use writer::OutputWriter;
