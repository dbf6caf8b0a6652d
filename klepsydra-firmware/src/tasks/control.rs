//! Main control task
//!
//! Runs the per-tick policy at the panel frame rate: update timers,
//! redraw the frame buffer, flush it to the panel, dispatch any alert,
//! and sample the button. Pacing uses a must-not-exceed sleep: a tick
//! that ran short sleeps away the rest of its budget, a tick that ran
//! long starts the next frame immediately - there is no catch-up, so
//! frames silently run slow under load.

use defmt::*;
use embassy_time::{Instant, Timer};

use klepsydra_core::config::TimerConfig;
use klepsydra_core::control::{ControlLoop, TICK_HZ};
use klepsydra_core::font::GlyphFont;
use klepsydra_drivers::PanelTransport;
use klepsydra_hal::InputPin;
use klepsydra_hal_rp2040::{RpInput, RpOutput};

use crate::channels::BEEP_CHANNEL;

/// Frame budget in milliseconds
const FRAME_INTERVAL_MS: u64 = 1000 / TICK_HZ as u64;

/// Control task - the always-on frame loop
#[embassy_executor::task]
pub async fn control_task(
    mut transport: PanelTransport<RpOutput>,
    button: RpInput,
    font: &'static GlyphFont<'static>,
    config: TimerConfig,
) {
    info!("Control task started ({} Hz)", TICK_HZ);

    let mut control = ControlLoop::new(font, config, Instant::now().as_millis());

    loop {
        let frame_start = Instant::now();

        // Button is wired active-low with the internal pull-up
        let pressed = button.is_low();
        let blink_phase = transport.frame_count();

        if let Some(pattern) = control.tick(frame_start.as_millis(), pressed, blink_phase) {
            debug!(
                "alert: {} ms half-cycle x{}",
                pattern.interval_ms, pattern.repeats
            );
            if BEEP_CHANNEL.try_send(pattern).is_err() {
                warn!("beep queue full, alert dropped");
            }
        }

        transport.flush(control.frame());

        let spent = frame_start.elapsed().as_millis();
        if spent < FRAME_INTERVAL_MS {
            Timer::after_millis(FRAME_INTERVAL_MS - spent).await;
        }
    }
}
