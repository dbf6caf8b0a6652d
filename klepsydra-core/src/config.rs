//! Configuration type definitions
//!
//! Durations are configured in whole minutes. The firmware parses an
//! embedded TOML resource into these types before the control loop
//! starts; everything here also carries defaults so a missing key
//! falls back cleanly.

/// Number of hold-menu presets (~2 through ~6 seconds of press)
pub const HOLD_PRESETS: usize = 5;

/// One hold-menu entry: the pair of durations applied together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Preset {
    /// Slot countdown length in minutes
    pub slot_minutes: u16,
    /// Total countdown length in minutes
    pub total_minutes: u16,
}

/// Timer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// Default slot duration in minutes
    pub slot_minutes: u16,
    /// Default total duration in minutes
    pub total_minutes: u16,
    /// Hold-menu presets, shortest hold first
    pub presets: [Preset; HOLD_PRESETS],
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            slot_minutes: 12,
            total_minutes: 90,
            presets: [
                Preset { slot_minutes: 15, total_minutes: 90 },
                Preset { slot_minutes: 20, total_minutes: 90 },
                Preset { slot_minutes: 30, total_minutes: 120 },
                Preset { slot_minutes: 45, total_minutes: 150 },
                Preset { slot_minutes: 60, total_minutes: 180 },
            ],
        }
    }
}

impl TimerConfig {
    /// Default slot duration in seconds
    pub fn slot_seconds(&self) -> u32 {
        self.slot_minutes as u32 * 60
    }

    /// Default total duration in seconds
    pub fn total_seconds(&self) -> u32 {
        self.total_minutes as u32 * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = TimerConfig::default();
        assert_eq!(c.slot_seconds(), 720);
        assert_eq!(c.total_seconds(), 5_400);
        // Menu is ordered: longer hold, longer slot
        for pair in c.presets.windows(2) {
            assert!(pair[0].slot_minutes < pair[1].slot_minutes);
        }
    }
}
