//! Buzzer tone abstraction
//!
//! A PWM-style tone generator on a dedicated pin. Frequency and duty
//! cycle are fixed at construction by the implementing crate; the
//! playback task only gates the tone on and off to shape beep patterns.

/// Gated tone output
pub trait ToneOutput {
    /// Start sounding the tone
    fn on(&mut self);

    /// Stop sounding the tone
    fn off(&mut self);
}
