//! Hardware driver implementations for the Klepsydra panel timer
//!
//! Drivers are generic over the `klepsydra-hal` pin traits so the
//! bit-level protocol can be verified on the host with recording mock
//! pins.

#![no_std]
#![deny(unsafe_code)]

pub mod panel;

pub use panel::{PanelPins, PanelTransport};
