//! Bit-banged transport for the 32x16 bi-color panel
//!
//! The panel is a shift-register chain with two RAM banks. Each row is
//! clocked in serially over the red/green data lines, then committed to
//! the currently addressed bank with a write-enable pulse. Two
//! auto-switch lines, driven once at construction, let the panel show
//! one bank while the next is written, so flushing never tears.
//!
//! The line-level ordering in `flush` matches what the panel latches on
//! and must not be reordered: column data latches on the rising clock
//! edge, the row address is only valid while address-latch-enable is
//! high, and write-enable commits on its falling edge.

use klepsydra_core::framebuffer::{Color, FrameBuffer, PANEL_COLS, PANEL_ROWS};
use klepsydra_hal::OutputPin;

/// Number of row address lines (16 rows)
pub const ADDR_LINES: usize = 4;

/// The output lines wired to the panel connector
pub struct PanelPins<P> {
    /// Serial data, red component
    pub red: P,
    /// Serial data, green component
    pub green: P,
    /// Shift clock; data latches on the rising edge
    pub clock: P,
    /// Row address bits 0-3
    pub addr: [P; ADDR_LINES],
    /// Address latch enable
    pub ale: P,
    /// Write enable; commits the shifted row on the high->low pulse
    pub we: P,
}

/// Serializes frame buffers to the physical panel
///
/// Holds no display state beyond the pin handles and a frame counter;
/// the counter feeds the blink phase of the progress-bar fraction
/// pixel. There is no error path: a stuck or unconnected panel is
/// undetectable at this layer.
pub struct PanelTransport<P> {
    pins: PanelPins<P>,
    /// Held so the auto-switch lines keep their level for the lifetime
    /// of the transport
    _switches: (P, P),
    frame: u32,
}

impl<P: OutputPin> PanelTransport<P> {
    /// Take ownership of the panel lines and enable bank auto-switching
    pub fn new(pins: PanelPins<P>, mut switch_a: P, mut switch_b: P) -> Self {
        // Both switch lines high: the panel flips banks itself on each
        // completed write pass.
        switch_a.set_high();
        switch_b.set_high();
        Self {
            pins,
            _switches: (switch_a, switch_b),
            frame: 0,
        }
    }

    /// Push one frame buffer snapshot to the panel
    ///
    /// Serializes all 16 rows in ascending order, then advances the
    /// frame counter.
    pub fn flush(&mut self, fb: &FrameBuffer) {
        for row in 0..PANEL_ROWS {
            self.shift_row(fb, row);
            self.latch_row(row);
        }
        self.frame = self.frame.wrapping_add(1);
    }

    /// Flush counter, used by the renderer as the blink phase
    pub fn frame_count(&self) -> u32 {
        self.frame
    }

    /// Clock one row's 32 pixels into the shift register, left to right
    fn shift_row(&mut self, fb: &FrameBuffer, row: usize) {
        for col in 0..PANEL_COLS {
            let color = fb.pixel(col as i32, row as i32).unwrap_or(Color::Black);
            self.pins.clock.set_low();
            self.pins.red.set_state(color.red_on());
            self.pins.green.set_state(color.green_on());
            self.pins.clock.set_high();
        }
    }

    /// Commit the shifted row into the addressed RAM bank
    fn latch_row(&mut self, row: usize) {
        self.pins.ale.set_high();
        for bit in 0..ADDR_LINES {
            self.pins.addr[bit].set_state(row >> bit & 1 == 1);
        }
        self.pins.we.set_high();
        self.pins.we.set_low();
        self.pins.ale.set_low();
    }
}
