//! Per-tick control policy
//!
//! Ties the core components together once per frame tick: update both
//! timers, clear and redraw the frame buffer from timer state, hand
//! the frame to the transport (done by the caller), evaluate the alert
//! scheduler against the slot timer, then evaluate button input. The
//! button drives a one-dimensional hold menu: the longer a continuous
//! press, the longer the preset applied to both timers.

use core::fmt::Write;

use heapless::String;

use crate::alert::{AlertScheduler, BeepPattern};
use crate::config::{TimerConfig, HOLD_PRESETS};
use crate::font::GlyphFont;
use crate::framebuffer::{Color, FrameBuffer};
use crate::timer::CountdownTimer;

/// Frame ticks per second
///
/// Three ticks per second samples every whole remaining-seconds value,
/// which the alert scheduler's exact-equality thresholds rely on.
pub const TICK_HZ: u32 = 3;

/// Debounce tick counts at which the hold menu advances (~2..6 s)
const HOLD_THRESHOLD_TICKS: [u32; HOLD_PRESETS] = [
    2 * TICK_HZ,
    3 * TICK_HZ,
    4 * TICK_HZ,
    5 * TICK_HZ,
    6 * TICK_HZ,
];

/// Grid row under the digits showing one dot per completed slot
const LAP_DOT_ROW: i32 = 1;

/// Grid row of the total-timer progress bar
const TOTAL_BAR_ROW: i32 = 14;

/// Grid row of the slot-timer progress bar
const SLOT_BAR_ROW: i32 = 15;

/// Display color for a timer reading
///
/// Red inside the final minute, orange inside the final quarter,
/// green otherwise.
fn color_for(remaining_s: u32, duration_s: u32) -> Color {
    if remaining_s <= 60 {
        Color::Red
    } else if remaining_s * 4 <= duration_s {
        Color::Orange
    } else {
        Color::Green
    }
}

/// The per-tick state machine over both timers and the button
pub struct ControlLoop<'a> {
    font: &'a GlyphFont<'a>,
    config: TimerConfig,
    frame: FrameBuffer,
    slot: CountdownTimer,
    total: CountdownTimer,
    alerts: AlertScheduler,
    /// Consecutive ticks the button has read "pressed"
    hold_ticks: u32,
}

impl<'a> ControlLoop<'a> {
    /// Construct with the configured default durations, started at `now_ms`
    pub fn new(font: &'a GlyphFont<'a>, config: TimerConfig, now_ms: u64) -> Self {
        let slot = CountdownTimer::new(config.slot_seconds(), now_ms);
        let total = CountdownTimer::new(config.total_seconds(), now_ms);
        Self {
            font,
            config,
            frame: FrameBuffer::new(),
            slot,
            total,
            alerts: AlertScheduler::default(),
            hold_ticks: 0,
        }
    }

    /// Run one frame tick
    ///
    /// `blink_phase` is the transport's flush counter; `pressed` is the
    /// debounced-raw button level for this tick. Returns a beep pattern
    /// when an alert threshold fired and no playback is in flight.
    pub fn tick(&mut self, now_ms: u64, pressed: bool, blink_phase: u32) -> Option<BeepPattern> {
        self.slot.update(now_ms);
        self.total.update(now_ms);

        self.render(blink_phase);

        let beep = self
            .alerts
            .evaluate(self.slot.remaining(), self.slot.duration(), now_ms);

        self.handle_button(pressed, now_ms);

        beep
    }

    /// The frame rendered by the latest tick
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Slot timer state (read-only)
    pub fn slot(&self) -> &CountdownTimer {
        &self.slot
    }

    /// Total timer state (read-only)
    pub fn total(&self) -> &CountdownTimer {
        &self.total
    }

    fn render(&mut self, blink_phase: u32) {
        self.frame.clear();

        let slot_color = color_for(self.slot.remaining(), self.slot.duration());
        let total_color = color_for(self.total.remaining(), self.total.duration());

        // Slot remaining as four MMSS digits across the full width
        let minutes = self.slot.remaining() / 60;
        let seconds = self.slot.remaining() % 60;
        let mut digits: String<8> = String::new();
        let _ = write!(digits, "{:02}{:02}", minutes, seconds);
        self.frame.draw_text(self.font, 0, 0, &digits, slot_color);

        // One dot per completed slot, left to right
        for lap in 0..self.slot.count().min(16) {
            self.frame
                .set_pixel(lap as i32 * 2, LAP_DOT_ROW, Color::Orange);
        }

        self.frame.draw_progress_bar(
            0,
            TOTAL_BAR_ROW,
            32,
            ratio(self.total.remaining(), self.total.duration()),
            total_color,
            blink_phase,
        );
        self.frame.draw_progress_bar(
            0,
            SLOT_BAR_ROW,
            32,
            ratio(self.slot.remaining(), self.slot.duration()),
            slot_color,
            blink_phase,
        );
    }

    fn handle_button(&mut self, pressed: bool, now_ms: u64) {
        if pressed {
            self.hold_ticks += 1;
            // Crossing a threshold advances the hold menu immediately;
            // equality makes each entry apply exactly once per press.
            if let Some(i) = HOLD_THRESHOLD_TICKS
                .iter()
                .position(|&t| t == self.hold_ticks)
            {
                let preset = self.config.presets[i];
                self.restart_timers(
                    preset.slot_minutes as u32 * 60,
                    preset.total_minutes as u32 * 60,
                    now_ms,
                );
            }
        } else {
            // A short press that never reached the menu restores the
            // configured defaults; release always resets the counter.
            if self.hold_ticks > 0 && self.hold_ticks < HOLD_THRESHOLD_TICKS[0] {
                self.restart_timers(self.config.slot_seconds(), self.config.total_seconds(), now_ms);
            }
            self.hold_ticks = 0;
        }
    }

    /// Discard both timers and start fresh ones
    fn restart_timers(&mut self, slot_s: u32, total_s: u32, now_ms: u64) {
        self.slot = CountdownTimer::new(slot_s, now_ms);
        self.total = CountdownTimer::new(total_s, now_ms);
    }
}

fn ratio(remaining_s: u32, duration_s: u32) -> f32 {
    remaining_s as f32 / duration_s as f32
}
