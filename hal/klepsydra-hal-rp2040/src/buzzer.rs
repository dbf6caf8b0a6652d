//! PWM tone output
//!
//! Drives a piezo buzzer from a PWM slice. With the default divider
//! and a full-range wrap the carrier sits at 125 MHz / 65536 ≈ 1.9 kHz,
//! well inside piezo range. Gating the tone is done by moving the
//! compare level between the configured duty and zero; the slice stays
//! enabled throughout.

use embassy_rp::pwm::{Config, Pwm};
use klepsydra_hal::ToneOutput;

/// Full-range wrap value; sets the ~1.9 kHz carrier
const TOP: u16 = 0xFFFF;

/// Gated PWM tone on a channel-A pin
pub struct PwmTone {
    pwm: Pwm<'static>,
    on_cfg: Config,
    off_cfg: Config,
}

impl PwmTone {
    /// Wrap a configured PWM slice
    ///
    /// `duty_percent` sets the drive duty while the tone sounds;
    /// 50 gives the loudest square wave.
    pub fn new(pwm: Pwm<'static>, duty_percent: u8) -> Self {
        let duty = duty_percent.min(100);

        let mut on_cfg = Config::default();
        on_cfg.top = TOP;
        on_cfg.compare_a = (TOP as u32 * duty as u32 / 100) as u16;

        let mut off_cfg = Config::default();
        off_cfg.top = TOP;
        off_cfg.compare_a = 0;

        let mut tone = Self {
            pwm,
            on_cfg,
            off_cfg,
        };
        tone.off();
        tone
    }
}

impl ToneOutput for PwmTone {
    fn on(&mut self) {
        self.pwm.set_config(&self.on_cfg);
    }

    fn off(&mut self) {
        self.pwm.set_config(&self.off_cfg);
    }
}
