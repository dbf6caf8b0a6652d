//! 8x16 glyph font lookup
//!
//! The font resource is a flat table of consecutive 16-byte records,
//! one per character code 0-255 in ascending order. Each record holds
//! the glyph rows top to bottom, one byte per row, MSB = leftmost
//! column. The table is parsed once at startup and read-only after.

/// Bytes per glyph record (one per bitmap row)
pub const GLYPH_BYTES: usize = 16;

/// Number of character codes in a complete table
pub const GLYPH_COUNT: usize = 256;

/// Total size of a complete font table
pub const FONT_TABLE_LEN: usize = GLYPH_COUNT * GLYPH_BYTES;

/// Font resource errors
///
/// Any of these is fatal at startup; the control loop must not start
/// without a complete font table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// The resource is shorter than the 256 * 16 byte table
    Truncated {
        /// Bytes present in the resource
        actual: usize,
    },
}

/// Immutable character-code -> bitmap lookup table
#[derive(Debug, Clone, Copy)]
pub struct GlyphFont<'a> {
    data: &'a [u8],
}

impl<'a> GlyphFont<'a> {
    /// Validate and wrap a raw font table
    ///
    /// Trailing bytes beyond the 4096-byte table are ignored.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self, FontError> {
        if data.len() < FONT_TABLE_LEN {
            return Err(FontError::Truncated { actual: data.len() });
        }
        Ok(Self { data })
    }

    /// Bitmap row of a glyph, MSB = leftmost pixel
    pub fn row_bits(&self, ch: u8, row: usize) -> u8 {
        if row >= GLYPH_BYTES {
            return 0;
        }
        // Length was validated in from_bytes
        self.data
            .get(ch as usize * GLYPH_BYTES + row)
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_resource_is_rejected() {
        assert!(matches!(
            GlyphFont::from_bytes(&[]),
            Err(FontError::Truncated { actual: 0 })
        ));
        let short = [0u8; FONT_TABLE_LEN - 1];
        assert!(matches!(
            GlyphFont::from_bytes(&short),
            Err(FontError::Truncated { actual }) if actual == FONT_TABLE_LEN - 1
        ));
    }

    #[test]
    fn test_row_lookup() {
        let mut data = [0u8; FONT_TABLE_LEN];
        data[b'A' as usize * GLYPH_BYTES + 3] = 0x81;
        data[b'A' as usize * GLYPH_BYTES + 13] = 0x18;
        let font = GlyphFont::from_bytes(&data).unwrap();
        assert_eq!(font.row_bits(b'A', 3), 0x81);
        assert_eq!(font.row_bits(b'A', 13), 0x18);
        assert_eq!(font.row_bits(b'A', 4), 0);
        assert_eq!(font.row_bits(b'B', 3), 0);
        // Row index past the record is blank, not a fault
        assert_eq!(font.row_bits(b'A', 16), 0);
    }
}
