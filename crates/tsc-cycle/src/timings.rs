//! Read-only per-intersection phase durations.

use std::time::Duration;

use tsc_core::Phase;
use tsc_model::IntersectionRecord;

/// The three hold durations of one intersection's cycle.
///
/// A timings value is copied out of the working record before scheduling
/// starts; schedulers never see the record itself, so nothing they read can
/// change behind them.
///
/// Construction assumes a validated record: duration fields must be finite
/// and non-negative (`Duration::from_secs_f64` rejects anything else).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PhaseTimings {
    pub green: Duration,
    pub yellow: Duration,
    pub red: Duration,
}

impl PhaseTimings {
    pub fn new(green: Duration, yellow: Duration, red: Duration) -> Self {
        Self { green, yellow, red }
    }

    /// Snapshot the duration fields of a record.
    pub fn from_record(rec: &IntersectionRecord) -> Self {
        Self {
            green: Duration::from_secs_f64(rec.green_secs),
            yellow: Duration::from_secs_f64(rec.yellow_secs),
            red: Duration::from_secs_f64(rec.red_secs),
        }
    }

    /// Multiply every hold by `factor`, e.g. `0.01` for a time-compressed
    /// run.  `factor` must be finite and non-negative.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            green: self.green.mul_f64(factor),
            yellow: self.yellow.mul_f64(factor),
            red: self.red.mul_f64(factor),
        }
    }

    /// The hold duration of `phase`.
    #[inline]
    pub fn hold(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Green => self.green,
            Phase::Yellow => self.yellow,
            Phase::Red => self.red,
        }
    }
}
