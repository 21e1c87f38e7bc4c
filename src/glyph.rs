// src/glyph.rs

//! Defines the font table data model: `Glyph` records and the `Font` that
//! ties them to a packed bitmap.
//!
//! The layout is byte-for-byte the one used by Adafruit GFX fonts, so tables
//! generated by `fontconvert` can be pasted in as constants. Glyph bitmaps
//! are 1 bit per pixel, most significant bit first, with the rows of a glyph
//! concatenated without padding. Only the glyph's first row starts on a byte
//! boundary.

use anyhow::{bail, ensure, Result};
use log::warn;

/// Metrics and bitmap location of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Glyph {
    /// Index of the glyph's first byte in [`Font::bitmap`].
    pub bitmap_offset: u16,
    /// Bitmap width in pixels.
    pub width: u8,
    /// Bitmap height in pixels.
    pub height: u8,
    /// Distance the cursor moves right after this glyph.
    pub x_advance: u8,
    /// Horizontal distance from the cursor to the bitmap's left edge.
    pub x_offset: i8,
    /// Vertical distance from the baseline to the bitmap's top edge.
    /// Usually negative.
    pub y_offset: i8,
}

impl Glyph {
    pub const fn new(
        bitmap_offset: u16,
        width: u8,
        height: u8,
        x_advance: u8,
        x_offset: i8,
        y_offset: i8,
    ) -> Self {
        Self {
            bitmap_offset,
            width,
            height,
            x_advance,
            x_offset,
            y_offset,
        }
    }

    /// Number of bits the glyph's bitmap occupies.
    pub fn bit_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// A bitmap font covering the characters `first_char..=last_char`.
///
/// The tables are borrowed. A font is usually a `static`, but one assembled
/// at runtime works as long as it outlives every view into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font<'a> {
    /// Packed glyph bitmaps.
    pub bitmap: &'a [u8],
    /// One record per character, indexed by `char - first_char`.
    pub glyphs: &'a [Glyph],
    pub first_char: u8,
    pub last_char: u8,
    /// Line height: distance between two consecutive baselines.
    pub y_advance: u8,
}

impl<'a> Font<'a> {
    /// Glyph record for `ch`, or `None` if the font does not cover it.
    ///
    /// Control characters are not filtered here; see
    /// [`crate::font::GlyphFont::glyph`].
    pub fn glyph(&self, ch: u8) -> Option<&'a Glyph> {
        if ch < self.first_char || ch > self.last_char {
            return None;
        }
        self.glyphs.get(usize::from(ch - self.first_char))
    }

    /// Checks that the tables are consistent with each other.
    ///
    /// Built-in fonts are trusted. Call this for tables that come from
    /// outside the program before drawing with them.
    pub fn validate(&self) -> Result<()> {
        if self.first_char > self.last_char {
            warn!(
                "Font: first char {:#04X} is after last char {:#04X}",
                self.first_char, self.last_char
            );
            bail!(
                "font range is empty: first char {:#04X} > last char {:#04X}",
                self.first_char,
                self.last_char
            );
        }

        let expected = usize::from(self.last_char - self.first_char) + 1;
        ensure!(
            self.glyphs.len() == expected,
            "font covers {} characters but has {} glyphs",
            expected,
            self.glyphs.len()
        );

        let available_bits = self.bitmap.len() * 8;
        for (index, glyph) in self.glyphs.iter().enumerate() {
            let start = usize::from(glyph.bitmap_offset) * 8;
            let end = start + glyph.bit_count();
            if glyph.bit_count() > 0 && end > available_bits {
                let ch = usize::from(self.first_char) + index;
                warn!("Font: glyph {:#04X} reaches past the bitmap", ch);
                bail!(
                    "glyph {:#04X} needs bits {}..{} but the bitmap has {}",
                    ch,
                    start,
                    end,
                    available_bits
                );
            }
        }

        Ok(())
    }
}
