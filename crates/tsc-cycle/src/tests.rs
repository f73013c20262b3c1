//! Tests for cancellation and the phase scheduler.
//!
//! Holds are a few milliseconds here; assertions use generous margins so the
//! suite stays stable on loaded CI machines.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use tsc_core::{IntersectionId, Phase};
use tsc_model::IntersectionRecord;

use crate::{CancelToken, PhaseTimings, spawn};

fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

fn uniform_timings(ms: u64) -> PhaseTimings {
    PhaseTimings::new(millis(ms), millis(ms), millis(ms))
}

#[cfg(test)]
mod cancel {
    use super::*;

    #[test]
    fn fresh_token_is_not_cancelled() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn cancel_is_visible_to_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn wait_for_runs_to_completion_when_not_cancelled() {
        let token = CancelToken::new();
        let start = Instant::now();
        assert!(!token.wait_for(millis(30)));
        assert!(start.elapsed() >= millis(30));
    }

    #[test]
    fn wait_for_returns_immediately_when_already_cancelled() {
        let token = CancelToken::new();
        token.cancel();
        let start = Instant::now();
        assert!(token.wait_for(millis(500)));
        assert!(start.elapsed() < millis(100));
    }

    #[test]
    fn cancel_interrupts_a_wait_in_progress() {
        let token = CancelToken::new();
        let waiter = token.clone();
        let handle = std::thread::spawn(move || {
            let start = Instant::now();
            let cancelled = waiter.wait_for(Duration::from_secs(30));
            (cancelled, start.elapsed())
        });
        std::thread::sleep(millis(50));
        token.cancel();
        let (cancelled, elapsed) = handle.join().unwrap();
        assert!(cancelled);
        assert!(elapsed < Duration::from_secs(5), "wait should end well before 30s");
    }
}

#[cfg(test)]
mod timings {
    use super::*;

    #[test]
    fn from_record_snapshots_duration_fields() {
        let rec = IntersectionRecord::new("A", 450.0, 54.0, 5.0, 66.0);
        let t = PhaseTimings::from_record(&rec);
        assert_eq!(t.green, Duration::from_secs_f64(54.0));
        assert_eq!(t.yellow, Duration::from_secs(5));
        assert_eq!(t.red, Duration::from_secs(66));
    }

    #[test]
    fn hold_maps_phase_to_duration() {
        let t = PhaseTimings::new(millis(1), millis(2), millis(3));
        assert_eq!(t.hold(Phase::Green), millis(1));
        assert_eq!(t.hold(Phase::Yellow), millis(2));
        assert_eq!(t.hold(Phase::Red), millis(3));
    }

    #[test]
    fn scaled_shrinks_every_hold() {
        let t = PhaseTimings::new(millis(100), millis(200), millis(300)).scaled(0.01);
        assert_eq!(t.green, millis(1));
        assert_eq!(t.yellow, millis(2));
        assert_eq!(t.red, millis(3));
    }
}

#[cfg(test)]
mod scheduler {
    use super::*;

    #[test]
    fn cycle_starts_at_green_and_follows_phase_order() {
        let token = CancelToken::new();
        let (tx, rx) = mpsc::channel();
        let handle = spawn(
            IntersectionId::new("A"),
            uniform_timings(5),
            token.clone(),
            tx,
        )
        .unwrap();

        // First seven transitions: two full cycles plus the next green.
        let mut phases = Vec::new();
        for _ in 0..7 {
            let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
            assert_eq!(event.intersection.as_str(), "A");
            phases.push(event.phase);
        }
        token.cancel();
        handle.join();

        use Phase::{Green, Red, Yellow};
        assert_eq!(phases, [Green, Yellow, Red, Green, Yellow, Red, Green]);
    }

    #[test]
    fn a_slow_intersection_never_delays_a_fast_one() {
        let token = CancelToken::new();
        let (tx, rx) = mpsc::channel();

        let slow = spawn(
            IntersectionId::new("slow"),
            PhaseTimings::new(
                Duration::from_secs(30),
                Duration::from_secs(30),
                Duration::from_secs(30),
            ),
            token.clone(),
            tx.clone(),
        )
        .unwrap();
        let fast = spawn(
            IntersectionId::new("fast"),
            uniform_timings(5),
            token.clone(),
            tx,
        )
        .unwrap();

        // While "slow" sits in its first green hold, "fast" must keep cycling.
        let deadline = Instant::now() + millis(400);
        let mut fast_events = 0usize;
        let mut slow_events = 0usize;
        while Instant::now() < deadline {
            if let Ok(event) = rx.recv_timeout(millis(50)) {
                match event.intersection.as_str() {
                    "fast" => fast_events += 1,
                    _ => slow_events += 1,
                }
            }
        }
        token.cancel();
        slow.join();
        fast.join();

        assert!(
            fast_events >= 5,
            "fast scheduler made only {fast_events} transitions"
        );
        assert_eq!(slow_events, 1, "slow scheduler should still be in its first green");
    }

    #[test]
    fn cancellation_stops_every_scheduler_within_a_grace_period() {
        let token = CancelToken::new();
        let (tx, rx) = mpsc::channel();

        let handles: Vec<_> = ["A", "B", "C", "D"]
            .into_iter()
            .map(|id| {
                spawn(
                    IntersectionId::new(id),
                    PhaseTimings::new(
                        Duration::from_secs(30),
                        Duration::from_secs(30),
                        Duration::from_secs(30),
                    ),
                    token.clone(),
                    tx.clone(),
                )
                .unwrap()
            })
            .collect();
        drop(tx);

        // Every scheduler is parked in its first long hold.
        for _ in 0..handles.len() {
            rx.recv_timeout(Duration::from_secs(5)).unwrap();
        }

        let start = Instant::now();
        token.cancel();
        for handle in handles {
            handle.join();
        }
        assert!(
            start.elapsed() < Duration::from_secs(5),
            "schedulers must observe cancellation promptly, took {:?}",
            start.elapsed()
        );
    }

    #[test]
    fn dropped_receiver_does_not_stop_the_cycle() {
        let token = CancelToken::new();
        let (tx, rx) = mpsc::channel();
        let handle = spawn(
            IntersectionId::new("A"),
            uniform_timings(2),
            token.clone(),
            tx,
        )
        .unwrap();
        drop(rx);

        std::thread::sleep(millis(50));
        assert!(!handle.is_finished(), "cycle must outlive its event receiver");
        token.cancel();
        handle.join();
    }
}
