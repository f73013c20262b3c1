//! Wall-clock helper for event timestamps.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current Unix timestamp in whole seconds.
///
/// Diversion and phase-transition events carry wall-clock stamps.  A system
/// clock set before the epoch degrades to 0 rather than panicking.
pub fn unix_now_secs() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(_) => 0,
    }
}
