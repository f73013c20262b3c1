//! Semantic validation of the working record set.
//!
//! Loading (see [`loader`][crate::loader]) is purely syntactic; everything a
//! malformed measurement can smuggle past the parser — negative densities,
//! zero durations, NaN, reused ids — is caught here before the control loop
//! touches the set.

use std::collections::HashSet;

use tsc_core::IntersectionId;

use crate::error::ValidationError;
use crate::record::IntersectionRecord;

/// A record dropped from the working set, with the reason it was dropped.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub record: IntersectionRecord,
    pub error: ValidationError,
}

/// Check one record's fields.
///
/// Duplicate-id screening is a set-level concern; see [`screen_records`].
pub fn validate_record(rec: &IntersectionRecord) -> Result<(), ValidationError> {
    let fields = [
        ("traffic_density", rec.traffic_density),
        ("green_light_duration", rec.green_secs),
        ("yellow_light_duration", rec.yellow_secs),
        ("red_light_duration", rec.red_secs),
    ];

    for (field, value) in fields {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite {
                id: rec.id.clone(),
                field,
            });
        }
    }

    if rec.traffic_density < 0.0 {
        return Err(ValidationError::NegativeDensity {
            id: rec.id.clone(),
            value: rec.traffic_density,
        });
    }

    for (field, value) in fields.into_iter().skip(1) {
        if value <= 0.0 {
            return Err(ValidationError::NonPositiveDuration {
                id: rec.id.clone(),
                field,
                value,
            });
        }
    }

    Ok(())
}

/// Partition a working set into surviving records and rejections.
///
/// Field checks run per record.  Ids must also be unique across the set: the
/// first occurrence wins and later duplicates are rejected.  Ingestion order
/// is preserved for the survivors.
pub fn screen_records(
    records: Vec<IntersectionRecord>,
) -> (Vec<IntersectionRecord>, Vec<Rejection>) {
    let mut seen: HashSet<IntersectionId> = HashSet::with_capacity(records.len());
    let mut valid = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();

    for record in records {
        if let Err(error) = validate_record(&record) {
            rejected.push(Rejection { record, error });
            continue;
        }
        if !seen.insert(record.id.clone()) {
            let error = ValidationError::DuplicateId {
                id: record.id.clone(),
            };
            rejected.push(Rejection { record, error });
            continue;
        }
        valid.push(record);
    }

    (valid, rejected)
}
