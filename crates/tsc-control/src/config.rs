//! Run configuration.

use tsc_divert::{DEFAULT_THRESHOLD, DEFAULT_TRANSFER_RANGE};
use tsc_policy::DENSITY_REFERENCE;

/// Whether a run stops after persistence or also drives the signal cycles.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunMode {
    /// Adjust, divert, persist — no schedulers are started.
    AdjustOnly,
    /// Adjust, divert, persist, then start one scheduler per intersection.
    Schedule,
}

/// Top-level control-loop configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate and passed
/// to [`Controller::new`][crate::Controller::new].
#[derive(Clone, Debug)]
pub struct ControlConfig {
    /// Master RNG seed.  The same seed and input set replay the same
    /// diversion outcomes.
    pub seed: u64,

    /// Density treated as saturation by the timing policy.  Default: 500.
    pub density_reference: f64,

    /// Density above which an intersection sheds load.  Default: 400.
    pub diversion_threshold: f64,

    /// Inclusive transfer range drawn per diversion, vehicles.  Default:
    /// [20, 50].
    pub transfer_min: u32,
    pub transfer_max: u32,

    /// Multiplier applied to every phase hold before scheduling.  1.0 runs
    /// at wall-clock speed; small values compress a demo run.
    pub time_scale: f64,

    pub mode: RunMode,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            density_reference: DENSITY_REFERENCE,
            diversion_threshold: DEFAULT_THRESHOLD,
            transfer_min: DEFAULT_TRANSFER_RANGE.0,
            transfer_max: DEFAULT_TRANSFER_RANGE.1,
            time_scale: 1.0,
            mode: RunMode::AdjustOnly,
        }
    }
}
