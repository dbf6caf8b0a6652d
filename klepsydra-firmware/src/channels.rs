//! Inter-task communication channels
//!
//! Uses embassy-sync primitives for safe async communication between
//! the control loop and the buzzer playback task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use klepsydra_core::alert::BeepPattern;

/// Depth of the beep queue. The alert scheduler's busy-until guard
/// already prevents overlapping requests, so one slot of slack is
/// plenty; a full channel drops the request rather than blocking the
/// control loop.
const BEEP_CHANNEL_SIZE: usize = 2;

/// Beep patterns dispatched by the control task, played by the buzzer task
pub static BEEP_CHANNEL: Channel<CriticalSectionRawMutex, BeepPattern, BEEP_CHANNEL_SIZE> =
    Channel::new();
