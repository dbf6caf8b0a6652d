//! RP2040 implementations of the Klepsydra HAL traits
//!
//! Thin wrappers around `embassy-rp` GPIO and PWM types. The wrappers
//! exist so the panel transport and control loop stay generic over the
//! `klepsydra-hal` traits and remain host-testable.

#![no_std]

pub mod buzzer;
pub mod gpio;

pub use buzzer::PwmTone;
pub use gpio::{RpInput, RpOutput};
