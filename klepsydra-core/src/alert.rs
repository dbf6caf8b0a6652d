//! Alert scheduling
//!
//! Maps remaining-time thresholds of the slot timer to buzzer beep
//! patterns. Threshold checks are exact equality against the integer
//! remaining seconds, evaluated once per tick: the 3 Hz tick rate
//! samples every whole second, so a threshold cannot fall between
//! ticks. A single busy-until timestamp, shared across all levels,
//! drops any request that would overlap a playback in flight - alerts
//! never overlap or queue.

/// One buzzer playback request
///
/// Played as `repeats` cycles of tone-on for `interval_ms` followed by
/// tone-off for `interval_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeepPattern {
    /// Half-cycle length in milliseconds
    pub interval_ms: u32,
    /// Number of on/off cycles
    pub repeats: u8,
}

impl BeepPattern {
    /// Wall-clock length of the full playback
    pub fn total_ms(&self) -> u32 {
        self.repeats as u32 * 2 * self.interval_ms
    }
}

/// Number of alert levels
pub const ALERT_LEVELS: usize = 4;

/// Default patterns, level 0 (sparsest) to level 3 (most urgent)
///
/// Every pattern lasts at least a full second so the guard window
/// covers all ticks that observe the same remaining-seconds reading.
pub const DEFAULT_PATTERNS: [BeepPattern; ALERT_LEVELS] = [
    BeepPattern { interval_ms: 500, repeats: 2 },
    BeepPattern { interval_ms: 300, repeats: 3 },
    BeepPattern { interval_ms: 150, repeats: 5 },
    BeepPattern { interval_ms: 80, repeats: 10 },
];

/// Threshold -> pattern state machine with a global overlap guard
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertScheduler {
    patterns: [BeepPattern; ALERT_LEVELS],
    /// End-of-playback timestamp guarding all levels
    busy_until_ms: u64,
}

impl Default for AlertScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERNS)
    }
}

impl AlertScheduler {
    /// Create a scheduler with the given per-level patterns
    pub fn new(patterns: [BeepPattern; ALERT_LEVELS]) -> Self {
        Self {
            patterns,
            busy_until_ms: 0,
        }
    }

    /// Map the current timer reading to an alert level, if any
    ///
    /// Level 0 at half the duration, 1 at a quarter, 2 at one minute
    /// left, 3 at zero. First match wins when thresholds coincide on
    /// short durations.
    fn level_for(remaining_s: u32, duration_s: u32) -> Option<usize> {
        if remaining_s == duration_s / 2 {
            Some(0)
        } else if remaining_s == duration_s / 4 {
            Some(1)
        } else if remaining_s == 60 {
            Some(2)
        } else if remaining_s == 0 {
            Some(3)
        } else {
            None
        }
    }

    /// Evaluate the slot timer once per tick
    ///
    /// Returns the pattern to dispatch, or `None` when no threshold
    /// matches or a playback is still in flight (the request is
    /// dropped, not queued).
    pub fn evaluate(&mut self, remaining_s: u32, duration_s: u32, now_ms: u64) -> Option<BeepPattern> {
        let level = Self::level_for(remaining_s, duration_s)?;
        if now_ms < self.busy_until_ms {
            return None;
        }
        let pattern = self.patterns[level];
        self.busy_until_ms = now_ms + pattern.total_ms() as u64;
        Some(pattern)
    }
}
