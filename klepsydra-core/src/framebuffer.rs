//! In-memory frame buffer for the 32x16 panel
//!
//! The buffer is the single source of truth for what the panel shows:
//! it is cleared and fully redrawn every tick, then mirrored to the
//! hardware by the panel transport. All drawing primitives clip
//! silently at the grid edges; callers routinely draw partially
//! off-panel glyphs and rely on that.

use crate::font::GlyphFont;

/// Panel width in pixels
pub const PANEL_COLS: usize = 32;

/// Panel height in pixels
pub const PANEL_ROWS: usize = 16;

/// Glyph cell width in pixels
pub const GLYPH_COLS: i32 = 8;

/// First glyph bitmap row that is actually rendered
const GLYPH_ROW_FIRST: usize = 3;

/// One past the last rendered glyph bitmap row (rows 3..=13, 11 of 16;
/// rows 0-2 and 14-15 are blank spacing and are never written)
const GLYPH_ROW_END: usize = 14;

/// Pixel color of a bi-color LED cell
///
/// Orange is realized as simultaneous red+green drive on the two-wire
/// cell, not a third independent channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    #[default]
    Black,
    Red,
    Green,
    Orange,
}

impl Color {
    /// Level of the red data line for this color
    pub fn red_on(self) -> bool {
        matches!(self, Color::Red | Color::Orange)
    }

    /// Level of the green data line for this color
    pub fn green_on(self) -> bool {
        matches!(self, Color::Green | Color::Orange)
    }
}

/// 32x16 grid of pixel colors, row-major
///
/// Allocated once at startup and mutated in place; never resized.
pub struct FrameBuffer {
    cells: [[Color; PANEL_COLS]; PANEL_ROWS],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a new all-black frame buffer
    pub const fn new() -> Self {
        Self {
            cells: [[Color::Black; PANEL_COLS]; PANEL_ROWS],
        }
    }

    /// Reset every cell to black
    pub fn clear(&mut self) {
        self.cells = [[Color::Black; PANEL_COLS]; PANEL_ROWS];
    }

    /// Set a single pixel
    ///
    /// Out-of-range coordinates are a silent no-op, never a fault.
    pub fn set_pixel(&mut self, col: i32, row: i32, color: Color) {
        if col < 0 || row < 0 || col >= PANEL_COLS as i32 || row >= PANEL_ROWS as i32 {
            return;
        }
        self.cells[row as usize][col as usize] = color;
    }

    /// Read a single pixel, or `None` for out-of-range coordinates
    pub fn pixel(&self, col: i32, row: i32) -> Option<Color> {
        if col < 0 || row < 0 || col >= PANEL_COLS as i32 || row >= PANEL_ROWS as i32 {
            return None;
        }
        Some(self.cells[row as usize][col as usize])
    }

    /// Draw one 8x16 glyph with its top-left cell corner at (col, row)
    ///
    /// Only bitmap rows 3..=13 are rendered. Within those rows every
    /// pixel of the 8-wide cell is written: `color` where the bitmap
    /// bit is 1, explicitly black where it is 0. This overwrites the
    /// background; it is not a transparent blit.
    pub fn draw_glyph(&mut self, font: &GlyphFont<'_>, col: i32, row: i32, ch: u8, color: Color) {
        for y in GLYPH_ROW_FIRST..GLYPH_ROW_END {
            let bits = font.row_bits(ch, y);
            for x in 0..GLYPH_COLS {
                // MSB is the leftmost column
                let on = bits & (0x80 >> x) != 0;
                let c = if on { color } else { Color::Black };
                self.set_pixel(col + x, row + y as i32, c);
            }
        }
    }

    /// Draw text left-to-right, advancing 8 columns per character
    ///
    /// No wrapping; clipping happens per pixel in [`Self::set_pixel`].
    pub fn draw_text(&mut self, font: &GlyphFont<'_>, col: i32, row: i32, text: &str, color: Color) {
        for (i, ch) in text.bytes().enumerate() {
            self.draw_glyph(font, col + i as i32 * GLYPH_COLS, row, ch, color);
        }
    }

    /// Draw a horizontal progress bar starting at (col, row)
    ///
    /// Lights `floor(length * ratio)` consecutive pixels. The pixel
    /// after the lit run blinks (lit only on even `blink_phase`) when
    /// the true level reaches at least halfway into it; a run ending
    /// exactly on a pixel boundary counts as halfway, so a half-empty
    /// bar still shows a ticking edge. `ratio` is not clamped - the
    /// caller guarantees it stays in [0, 1].
    pub fn draw_progress_bar(
        &mut self,
        col: i32,
        row: i32,
        length: u32,
        ratio: f32,
        color: Color,
        blink_phase: u32,
    ) {
        let exact = length as f32 * ratio;
        let lit = exact as u32;
        let frac = exact - lit as f32;

        for i in 0..lit {
            self.set_pixel(col + i as i32, row, color);
        }

        let edge_blinks = frac > 0.5 || (frac == 0.0 && lit > 0 && lit < length);
        if edge_blinks && blink_phase % 2 == 0 {
            self.set_pixel(col + lit as i32, row, color);
        }
    }

    /// Count of non-black pixels (test and debug aid)
    pub fn lit_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| **c != Color::Black)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{GlyphFont, FONT_TABLE_LEN, GLYPH_BYTES};

    fn solid_digit_font() -> [u8; FONT_TABLE_LEN] {
        // Every printable digit gets a full 0xFF pattern in the rendered
        // rows so individual pixels are easy to predict.
        let mut data = [0u8; FONT_TABLE_LEN];
        for ch in b'0'..=b'9' {
            for row in 3..14 {
                data[ch as usize * GLYPH_BYTES + row] = 0xFF;
            }
        }
        data
    }

    #[test]
    fn test_set_pixel_out_of_range_is_noop() {
        let mut fb = FrameBuffer::new();
        for (col, row) in [(-1, 0), (0, -1), (32, 0), (0, 16), (100, 100), (-5, -5)] {
            fb.set_pixel(col, row, Color::Red);
        }
        assert_eq!(fb.lit_count(), 0);
        assert_eq!(fb.pixel(-1, 0), None);
        assert_eq!(fb.pixel(32, 0), None);
        assert_eq!(fb.pixel(0, 16), None);
    }

    #[test]
    fn test_set_and_clear() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(0, 0, Color::Red);
        fb.set_pixel(31, 15, Color::Orange);
        assert_eq!(fb.pixel(0, 0), Some(Color::Red));
        assert_eq!(fb.pixel(31, 15), Some(Color::Orange));
        fb.clear();
        assert_eq!(fb.lit_count(), 0);
        assert_eq!(fb.pixel(31, 15), Some(Color::Black));
    }

    #[test]
    fn test_color_components() {
        assert!(Color::Red.red_on() && !Color::Red.green_on());
        assert!(!Color::Green.red_on() && Color::Green.green_on());
        // Orange is both data lines driven at once
        assert!(Color::Orange.red_on() && Color::Orange.green_on());
        assert!(!Color::Black.red_on() && !Color::Black.green_on());
    }

    #[test]
    fn test_glyph_renders_only_middle_rows() {
        let data = solid_digit_font();
        let font = GlyphFont::from_bytes(&data).unwrap();
        let mut fb = FrameBuffer::new();
        fb.draw_glyph(&font, 0, 0, b'7', Color::Green);

        // Rows 0-2 and 14-15 are spacing and stay untouched
        for row in [0, 1, 2, 14, 15] {
            for col in 0..8 {
                assert_eq!(fb.pixel(col, row), Some(Color::Black));
            }
        }
        for row in 3..14 {
            for col in 0..8 {
                assert_eq!(fb.pixel(col, row), Some(Color::Green));
            }
        }
    }

    #[test]
    fn test_glyph_overwrites_background() {
        let data = solid_digit_font();
        let font = GlyphFont::from_bytes(&data).unwrap();
        let mut fb = FrameBuffer::new();
        fb.draw_glyph(&font, 0, 0, b'3', Color::Red);
        fb.draw_glyph(&font, 0, 0, b'3', Color::Green);
        // Second draw fully replaces the first color
        for row in 3..14 {
            for col in 0..8 {
                assert_eq!(fb.pixel(col, row), Some(Color::Green));
            }
        }
    }

    #[test]
    fn test_glyph_zero_bits_paint_black() {
        let mut data = [0u8; FONT_TABLE_LEN];
        // Left nibble lit, right nibble dark
        data[b'1' as usize * GLYPH_BYTES + 5] = 0xF0;
        let font = GlyphFont::from_bytes(&data).unwrap();

        let mut fb = FrameBuffer::new();
        fb.set_pixel(6, 5, Color::Orange); // pre-existing background
        fb.draw_glyph(&font, 0, 0, b'1', Color::Red);

        assert_eq!(fb.pixel(0, 5), Some(Color::Red));
        assert_eq!(fb.pixel(3, 5), Some(Color::Red));
        // The 0 bit overwrote the orange background with black
        assert_eq!(fb.pixel(6, 5), Some(Color::Black));
    }

    #[test]
    fn test_glyph_partially_off_panel_clips() {
        let data = solid_digit_font();
        let font = GlyphFont::from_bytes(&data).unwrap();
        let mut fb = FrameBuffer::new();
        fb.draw_glyph(&font, 28, 0, b'0', Color::Red);
        assert_eq!(fb.pixel(31, 5), Some(Color::Red));
        // Columns 32..36 fall off the panel silently
        assert_eq!(fb.lit_count(), 4 * 11);
    }

    #[test]
    fn test_text_advances_eight_columns() {
        let data = solid_digit_font();
        let font = GlyphFont::from_bytes(&data).unwrap();
        let mut fb = FrameBuffer::new();
        fb.draw_text(&font, 0, 0, "12", Color::Green);
        assert_eq!(fb.pixel(7, 3), Some(Color::Green));
        assert_eq!(fb.pixel(8, 3), Some(Color::Green));
        assert_eq!(fb.pixel(15, 3), Some(Color::Green));
        assert_eq!(fb.pixel(16, 3), Some(Color::Black));
    }

    #[test]
    fn test_progress_bar_empty_and_full() {
        let mut fb = FrameBuffer::new();
        fb.draw_progress_bar(0, 15, 32, 0.0, Color::Green, 0);
        assert_eq!(fb.lit_count(), 0);

        fb.draw_progress_bar(0, 15, 32, 1.0, Color::Green, 0);
        assert_eq!(fb.lit_count(), 32);
        for col in 0..32 {
            assert_eq!(fb.pixel(col, 15), Some(Color::Green));
        }
    }

    #[test]
    fn test_progress_bar_half_blinks_edge_pixel() {
        // 16 solid pixels plus a 17th that is lit only on even phases
        let mut fb = FrameBuffer::new();
        fb.draw_progress_bar(0, 15, 32, 0.5, Color::Green, 0);
        assert_eq!(fb.pixel(15, 15), Some(Color::Green));
        assert_eq!(fb.pixel(16, 15), Some(Color::Green));
        assert_eq!(fb.pixel(17, 15), Some(Color::Black));
        assert_eq!(fb.lit_count(), 17);

        fb.clear();
        fb.draw_progress_bar(0, 15, 32, 0.5, Color::Green, 1);
        assert_eq!(fb.pixel(15, 15), Some(Color::Green));
        assert_eq!(fb.pixel(16, 15), Some(Color::Black));
        assert_eq!(fb.lit_count(), 16);
    }

    #[test]
    fn test_progress_bar_large_fraction_blinks() {
        // 32 * 0.9 = 28.8 -> 28 solid, fraction 0.8 > 0.5 blinks the 29th
        let mut fb = FrameBuffer::new();
        fb.draw_progress_bar(0, 15, 32, 0.9, Color::Red, 2);
        assert_eq!(fb.lit_count(), 29);

        fb.clear();
        fb.draw_progress_bar(0, 15, 32, 0.9, Color::Red, 3);
        assert_eq!(fb.lit_count(), 28);
    }

    proptest::proptest! {
        /// Writes land only inside the grid: any out-of-range
        /// coordinate is a silent no-op, never a panic.
        #[test]
        fn set_pixel_clips_any_coordinate(col: i32, row: i32) {
            let mut fb = FrameBuffer::new();
            fb.set_pixel(col, row, Color::Orange);
            let in_cols = (0..PANEL_COLS as i32).contains(&col);
            let in_rows = (0..PANEL_ROWS as i32).contains(&row);
            if in_cols && in_rows {
                assert_eq!(fb.pixel(col, row), Some(Color::Orange));
                assert_eq!(fb.lit_count(), 1);
            } else {
                assert_eq!(fb.pixel(col, row), None);
                assert_eq!(fb.lit_count(), 0);
            }
        }
    }
}
