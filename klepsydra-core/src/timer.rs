//! Repeating countdown timer
//!
//! Tracks remaining time against a monotonic millisecond clock. When
//! the countdown reaches zero it silently restarts from its full
//! duration and increments a lap counter - there is no terminal
//! "finished" state. The zero reading is kept for the tick on which it
//! occurs so the alert scheduler can observe it.

/// A free-running repeating countdown with a lap counter
///
/// Invariant: `0 <= remaining <= duration` in every reachable state.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CountdownTimer {
    /// Countdown length in seconds
    duration_s: u32,
    /// Monotonic reference point of the current lap
    started_ms: u64,
    /// Completed laps
    count: u32,
    /// Seconds elapsed in the current lap (derived)
    elapsed_s: u32,
    /// Seconds left in the current lap (derived)
    remaining_s: u32,
}

impl CountdownTimer {
    /// Start a fresh countdown of `duration_s` seconds at `now_ms`
    pub fn new(duration_s: u32, now_ms: u64) -> Self {
        Self {
            duration_s,
            started_ms: now_ms,
            count: 0,
            elapsed_s: 0,
            remaining_s: duration_s,
        }
    }

    /// Recompute elapsed/remaining from the clock
    ///
    /// When `remaining` lands exactly on zero the reference point is
    /// reset to `now_ms` and the lap counter increments; the zero
    /// reading stays visible until the next update.
    pub fn update(&mut self, now_ms: u64) {
        self.elapsed_s = (now_ms.saturating_sub(self.started_ms) / 1000) as u32;
        self.remaining_s = self.duration_s.saturating_sub(self.elapsed_s);
        if self.remaining_s == 0 {
            self.started_ms = now_ms;
            self.count = self.count.wrapping_add(1);
        }
    }

    /// Countdown length in seconds
    pub fn duration(&self) -> u32 {
        self.duration_s
    }

    /// Seconds elapsed in the current lap
    pub fn elapsed(&self) -> u32 {
        self.elapsed_s
    }

    /// Seconds remaining in the current lap
    pub fn remaining(&self) -> u32 {
        self.remaining_s
    }

    /// Completed laps
    pub fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_timer() {
        for d in [1u32, 5, 60, 720, 5400] {
            let t = CountdownTimer::new(d, 17_000);
            assert_eq!(t.remaining(), d);
            assert_eq!(t.elapsed(), 0);
            assert_eq!(t.count(), 0);
        }
    }

    #[test]
    fn test_counts_down_by_whole_seconds() {
        let mut t = CountdownTimer::new(720, 0);
        t.update(334);
        assert_eq!(t.remaining(), 720);
        t.update(1_002);
        assert_eq!(t.remaining(), 719);
        assert_eq!(t.elapsed(), 1);
        t.update(660_000);
        assert_eq!(t.remaining(), 60);
        assert_eq!(t.count(), 0);
    }

    #[test]
    fn test_remaining_stays_in_range() {
        let mut t = CountdownTimer::new(90, 0);
        for step in 0..2_000u64 {
            t.update(step * 334);
            assert!(t.remaining() <= t.duration());
            assert!(t.elapsed() <= t.duration() || t.remaining() == 0);
        }
    }

    #[test]
    fn test_repeat_law() {
        let mut t = CountdownTimer::new(10, 0);
        t.update(10_000);
        // Zero reading is visible on the tick that hits it
        assert_eq!(t.remaining(), 0);
        assert_eq!(t.count(), 1);
        assert_eq!(t.duration(), 10);

        // Next tick restarts the lap near its full duration
        t.update(10_334);
        assert_eq!(t.remaining(), 10);
        assert_eq!(t.elapsed(), 0);
        assert_eq!(t.count(), 1);

        // And it keeps lapping
        t.update(20_334);
        assert_eq!(t.remaining(), 0);
        assert_eq!(t.count(), 2);
    }

    #[test]
    fn test_overshoot_clamps_to_zero() {
        // A late tick far past the deadline still reads zero, never negative
        let mut t = CountdownTimer::new(10, 0);
        t.update(13_500);
        assert_eq!(t.remaining(), 0);
        assert_eq!(t.count(), 1);
        t.update(14_000);
        assert_eq!(t.remaining(), 10);
    }

    #[test]
    fn test_clock_before_start_reads_full() {
        let t0 = 5_000;
        let mut t = CountdownTimer::new(60, t0);
        t.update(4_000);
        assert_eq!(t.remaining(), 60);
        assert_eq!(t.elapsed(), 0);
    }

    proptest::proptest! {
        /// A fresh timer reads full for any duration and any epoch.
        #[test]
        fn fresh_timer_reads_full(duration in 1u32..=86_400, now in 0u64..=u64::MAX / 2) {
            let t = CountdownTimer::new(duration, now);
            assert_eq!(t.remaining(), duration);
            assert_eq!(t.elapsed(), 0);
            assert_eq!(t.count(), 0);
        }

        /// `0 <= remaining <= duration` holds across arbitrary clock
        /// advances, including ones that overshoot the deadline.
        #[test]
        fn remaining_never_leaves_range(
            duration in 1u32..=86_400,
            start in 0u64..=1_000_000_000,
            steps in proptest::collection::vec(0u64..=600_000, 1..64),
        ) {
            let mut t = CountdownTimer::new(duration, start);
            let mut now = start;
            for step in steps {
                now += step;
                t.update(now);
                assert!(t.remaining() <= t.duration(),
                    "remaining {} exceeds duration {}", t.remaining(), t.duration());
            }
        }
    }
}
