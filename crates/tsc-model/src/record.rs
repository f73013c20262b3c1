//! The per-intersection working record.

use tsc_core::IntersectionId;

/// Measured state and signal timings for one intersection.
///
/// Records are created by ingestion, flow through the timing policy (which
/// rewrites `green_secs` and `red_secs`) and the diversion engine (which
/// rewrites `traffic_density`), are persisted once, and are read-only from
/// the moment scheduling starts.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionRecord {
    /// Unique stable identifier.  Never mutated after creation.
    pub id: IntersectionId,

    /// Non-negative load gauge (vehicles or an equivalent unit).  Mutated
    /// only by the diversion engine.
    pub traffic_density: f64,

    /// Green hold time in seconds.  Mutated only by the timing policy.
    pub green_secs: f64,

    /// Yellow hold time in seconds.  External input; never recomputed.
    pub yellow_secs: f64,

    /// Red hold time in seconds.  Mutated only by the timing policy.
    pub red_secs: f64,

    /// Green duration as ingested.  The timing policy scales from this value
    /// rather than the live `green_secs`, so re-applying the policy with an
    /// unchanged density reproduces the same durations.
    pub base_green_secs: f64,
}

impl IntersectionRecord {
    /// Build a record from ingested values.
    ///
    /// `base_green_secs` is captured from the ingested green duration.
    pub fn new(
        id: impl Into<IntersectionId>,
        traffic_density: f64,
        green_secs: f64,
        yellow_secs: f64,
        red_secs: f64,
    ) -> Self {
        Self {
            id: id.into(),
            traffic_density,
            green_secs,
            yellow_secs,
            red_secs,
            base_green_secs: green_secs,
        }
    }
}
