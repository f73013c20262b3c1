//! `tsc-model` — the per-intersection working record and its ingestion path.
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`record`]   | `IntersectionRecord`                                |
//! | [`validate`] | Per-record field checks, duplicate-id screening     |
//! | [`loader`]   | CSV ingestion (`load_records_csv` / `_reader`)      |
//! | [`error`]    | `ModelError`, `ValidationError`                     |

pub mod error;
pub mod loader;
pub mod record;
pub mod validate;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ModelError, ValidationError};
pub use loader::{load_records_csv, load_records_reader};
pub use record::IntersectionRecord;
pub use validate::{Rejection, screen_records, validate_record};
