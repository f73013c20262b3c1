//! Cooperative cancellation for scheduler threads.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Cloneable stop signal shared by every scheduler in one run.
///
/// Internally a mutex-guarded flag plus a condvar: [`cancel`][Self::cancel]
/// flips the flag and wakes every sleeper, so a scheduler parked in the
/// middle of a long phase hold observes the signal immediately instead of at
/// the end of the hold.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    cancelled: Mutex<bool>,
    wake: Condvar,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal every holder of this token to stop.  Idempotent.
    pub fn cancel(&self) {
        let mut flag = self
            .inner
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *flag = true;
        self.inner.wake.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self
            .inner
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Sleep for up to `dur`, waking early on cancellation.
    ///
    /// Returns `true` if the token was cancelled before or during the wait,
    /// `false` if the full duration elapsed.
    pub fn wait_for(&self, dur: Duration) -> bool {
        let deadline = Instant::now() + dur;
        let mut flag = self
            .inner
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        loop {
            if *flag {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            // Condvar wakeups may be spurious; loop until the flag is set or
            // the deadline passes.
            let (guard, _) = self
                .inner
                .wake
                .wait_timeout(flag, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            flag = guard;
        }
    }
}
