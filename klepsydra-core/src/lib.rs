//! Board-agnostic core logic for the Klepsydra panel timer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Frame buffer and drawing primitives for the 32x16 panel
//! - 8x16 glyph font lookup
//! - Repeating countdown timers with lap counting
//! - Alert scheduling (remaining-time thresholds -> beep patterns)
//! - The per-tick control loop policy (render + button menu)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod alert;
pub mod config;
pub mod control;
pub mod font;
pub mod framebuffer;
pub mod timer;
