//! Density-proportional green/red split.
//!
//! # Design
//!
//! The green and red holds share a fixed 120 s cycle budget; yellow sits
//! outside it.  The green share scales linearly with measured density
//! relative to a saturation reference, clamped to a drivable band:
//!
//!   green = clamp(base_green * density / reference, 30, 90)
//!   red   = 120 - green
//!
//! Scaling always starts from the *ingested* green duration
//! (`base_green_secs`), never from a previously adjusted value, so repeated
//! application with an unchanged density is a fixed point rather than a
//! compounding rescale.

use tsc_model::IntersectionRecord;

use crate::error::PolicyError;

/// Lower clamp on the green hold, seconds.  A deserted intersection still
/// gets a usable green window.
pub const GREEN_MIN_SECS: f64 = 30.0;

/// Upper clamp on the green hold, seconds.
pub const GREEN_MAX_SECS: f64 = 90.0;

/// Fixed green+red cycle budget, seconds.
pub const CYCLE_SECS: f64 = 120.0;

/// Density at which an intersection is considered saturated.
pub const DENSITY_REFERENCE: f64 = 500.0;

/// Pure per-record timing policy.
///
/// `apply` touches only the record it is given and has no ordering dependency
/// between records, so the orchestrator is free to run it over the working
/// set in parallel.
#[derive(Clone, Copy, Debug)]
pub struct TimingPolicy {
    /// Density treated as saturation when computing the green scaling factor.
    pub density_reference: f64,
}

impl Default for TimingPolicy {
    fn default() -> Self {
        Self {
            density_reference: DENSITY_REFERENCE,
        }
    }
}

impl TimingPolicy {
    pub fn new(density_reference: f64) -> Self {
        Self { density_reference }
    }

    /// Recompute `green_secs` and `red_secs` from the record's density.
    ///
    /// A record with a non-finite or negative density is rejected with the
    /// record left untouched — clamping garbage into the drivable band would
    /// mask bad input.  Density 0 yields the 30 s floor, not a zero green.
    pub fn apply(&self, rec: &mut IntersectionRecord) -> Result<(), PolicyError> {
        if !rec.traffic_density.is_finite() || rec.traffic_density < 0.0 {
            return Err(PolicyError::InvalidDensity {
                id: rec.id.clone(),
                value: rec.traffic_density,
            });
        }

        let scaling = rec.traffic_density / self.density_reference;
        let green = (rec.base_green_secs * scaling).clamp(GREEN_MIN_SECS, GREEN_MAX_SECS);
        let red = CYCLE_SECS - green;

        // Both fields are written together only after both are computed.
        rec.green_secs = green;
        rec.red_secs = red;
        Ok(())
    }
}
