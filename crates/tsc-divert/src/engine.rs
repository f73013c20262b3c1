//! The diversion engine.
//!
//! # Algorithm
//!
//! Over-threshold intersections shed load to the single least-loaded
//! intersection in the whole set, one source at a time:
//!
//! 1. Select the sources with `traffic_density > threshold`, ascending by id.
//!    The order is stable so runs are reproducible; it matters because later
//!    diversions see the densities earlier ones left behind.
//! 2. For each source, re-read the current state at its turn: skip it if it
//!    has fallen to the threshold, find the global minimum-density record
//!    (first index on ties), and skip if the source itself is the minimum.
//! 3. Draw a transfer amount from the configured range, cap it at the
//!    source's remaining density, and move it.
//!
//! The minimum may be the same record turn after turn — the set drains into
//! one sink until that sink stops being the minimum.  That matches the
//! deployed system and is kept deliberately.
//!
//! The minimum lookup and the transfer for one source run under exclusive
//! `&mut` access to the slice; a parallel rendition would have to keep that
//! pair atomic per source or two sources could act on the same stale minimum.

use tracing::info;

use tsc_core::{ControlRng, unix_now_secs};
use tsc_model::IntersectionRecord;

use crate::error::DiversionError;
use crate::event::DiversionEvent;

/// Default density above which an intersection sheds load.
pub const DEFAULT_THRESHOLD: f64 = 400.0;

/// Default inclusive transfer range, vehicles per diversion.
pub const DEFAULT_TRANSFER_RANGE: (u32, u32) = (20, 50);

/// Redistributes density from congested records to the least-loaded one.
#[derive(Clone, Debug)]
pub struct DiversionEngine {
    threshold: f64,
    transfer_min: u32,
    transfer_max: u32,
}

impl DiversionEngine {
    /// Engine with the given threshold and the default transfer range.
    pub fn new(threshold: f64) -> Result<Self, DiversionError> {
        Self::with_transfer_range(
            threshold,
            DEFAULT_TRANSFER_RANGE.0,
            DEFAULT_TRANSFER_RANGE.1,
        )
    }

    /// Engine with an explicit inclusive transfer range.
    pub fn with_transfer_range(
        threshold: f64,
        transfer_min: u32,
        transfer_max: u32,
    ) -> Result<Self, DiversionError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(DiversionError::InvalidThreshold(threshold));
        }
        if transfer_min == 0 || transfer_min > transfer_max {
            return Err(DiversionError::InvalidTransferRange {
                min: transfer_min,
                max: transfer_max,
            });
        }
        Ok(Self {
            threshold,
            transfer_min,
            transfer_max,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Run one diversion pass over the working set.
    ///
    /// Fewer than two records is a no-op.  Total density is conserved
    /// exactly: a draw larger than the source's remaining density is capped,
    /// and only the capped amount reaches the target — the source never goes
    /// negative and no phantom density is created.
    pub fn divert(
        &self,
        records: &mut [IntersectionRecord],
        rng: &mut ControlRng,
    ) -> Vec<DiversionEvent> {
        if records.len() < 2 {
            return Vec::new();
        }

        let mut sources: Vec<usize> = (0..records.len())
            .filter(|&i| records[i].traffic_density > self.threshold)
            .collect();
        sources.sort_by(|&a, &b| records[a].id.cmp(&records[b].id));

        let mut events = Vec::new();
        for src in sources {
            // Re-evaluate at this source's turn; earlier transfers may have
            // changed the picture.
            if records[src].traffic_density <= self.threshold {
                continue;
            }
            let Some(dst) = min_density_index(records) else {
                continue;
            };
            if dst == src {
                continue;
            }

            let drawn = rng.gen_range(self.transfer_min..=self.transfer_max) as f64;
            let amount = drawn.min(records[src].traffic_density);
            records[src].traffic_density -= amount;
            records[dst].traffic_density += amount;

            let event = DiversionEvent {
                source: records[src].id.clone(),
                target: records[dst].id.clone(),
                amount,
                unix_time_secs: unix_now_secs(),
            };
            info!(
                source = %event.source,
                target = %event.target,
                amount,
                "diverting traffic"
            );
            events.push(event);
        }
        events
    }
}

/// Index of the record with the lowest density; first index on ties.
fn min_density_index(records: &[IntersectionRecord]) -> Option<usize> {
    records
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.traffic_density.total_cmp(&b.traffic_density))
        .map(|(i, _)| i)
}
