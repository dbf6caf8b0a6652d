//! Buzzer playback task
//!
//! Plays beep patterns to completion, one at a time. Requests arrive
//! over a bounded channel from the control task; once a pattern starts
//! it runs to the end - there is no cancellation. Overlap prevention
//! lives in the alert scheduler, not here.

use defmt::*;
use embassy_time::Timer;

use klepsydra_hal::ToneOutput;
use klepsydra_hal_rp2040::PwmTone;

use crate::channels::BEEP_CHANNEL;

/// Buzzer task - drains the beep queue
#[embassy_executor::task]
pub async fn buzzer_task(mut tone: PwmTone) {
    info!("Buzzer task started");

    loop {
        let pattern = BEEP_CHANNEL.receive().await;
        trace!("playing {} cycles", pattern.repeats);

        for _ in 0..pattern.repeats {
            tone.on();
            Timer::after_millis(pattern.interval_ms as u64).await;
            tone.off();
            Timer::after_millis(pattern.interval_ms as u64).await;
        }
    }
}
