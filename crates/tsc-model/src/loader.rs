//! CSV ingestion.
//!
//! # CSV format
//!
//! One row per intersection:
//!
//! ```csv
//! intersection_id,traffic_density,green_light_duration,yellow_light_duration,red_light_duration
//! A,450,60,5,60
//! B,120,45,4,75
//! ```
//!
//! Field names match the persistence output exactly, so a persisted set can
//! be re-ingested unchanged.  Loading is purely syntactic; semantic checks
//! (non-negative density, positive durations, unique ids) happen in
//! [`screen_records`][crate::screen_records].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::ModelError;
use crate::record::IntersectionRecord;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawRecord {
    intersection_id: String,
    traffic_density: f64,
    green_light_duration: f64,
    yellow_light_duration: f64,
    red_light_duration: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load intersection records from a CSV file, in file order.
pub fn load_records_csv(path: &Path) -> Result<Vec<IntersectionRecord>, ModelError> {
    let file = std::fs::File::open(path).map_err(ModelError::Io)?;
    load_records_reader(file)
}

/// Like [`load_records_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_records_reader<R: Read>(reader: R) -> Result<Vec<IntersectionRecord>, ModelError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize::<RawRecord>() {
        let row = result.map_err(|e| ModelError::Parse(e.to_string()))?;
        records.push(IntersectionRecord::new(
            row.intersection_id,
            row.traffic_density,
            row.green_light_duration,
            row.yellow_light_duration,
            row.red_light_duration,
        ));
    }

    Ok(records)
}
