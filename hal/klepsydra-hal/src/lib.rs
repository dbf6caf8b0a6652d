//! Hardware abstraction traits for the Klepsydra panel timer
//!
//! The panel protocol, button handling, and buzzer playback are all
//! written against these traits so the logic can be exercised on the
//! host with mock pins. Chip-specific crates (e.g.
//! `klepsydra-hal-rp2040`) provide the real implementations.

#![no_std]
#![deny(unsafe_code)]

pub mod buzzer;
pub mod gpio;

pub use buzzer::ToneOutput;
pub use gpio::{InputPin, OutputPin};
