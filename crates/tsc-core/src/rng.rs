//! Deterministic run-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! The controller draws randomness in exactly one place — the diversion
//! transfer amount — and that draw must be reproducible.  Randomized steps
//! take `&mut ControlRng` seeded from the run configuration instead of
//! reaching for thread-local entropy: re-running with the same seed and the
//! same input set replays the same transfers.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable RNG handed to every randomized step of one control-loop run.
///
/// The type is `!Sync`; a run owns exactly one and threads it through the
/// phases that need it.
pub struct ControlRng(SmallRng);

impl ControlRng {
    /// Seed deterministically from the run's configured seed.
    pub fn new(seed: u64) -> Self {
        ControlRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
