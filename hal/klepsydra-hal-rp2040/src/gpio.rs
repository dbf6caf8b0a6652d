//! GPIO wrappers
//!
//! `embassy-rp` pin types behind the `klepsydra-hal` traits. Wrapping
//! (rather than implementing the traits directly) keeps the orphan
//! rule happy: both the traits and the embassy types are foreign to
//! each other.

use embassy_rp::gpio::{Input, Output};
use klepsydra_hal::{InputPin, OutputPin};

/// A push-pull output pin
pub struct RpOutput {
    pin: Output<'static>,
}

impl RpOutput {
    /// Wrap a configured embassy output pin
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// A digital input pin
pub struct RpInput {
    pin: Input<'static>,
}

impl RpInput {
    /// Wrap a configured embassy input pin
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }
}

impl InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
