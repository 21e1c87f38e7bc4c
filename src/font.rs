// src/font.rs

//! Decodes and draws single characters of a bitmap font.
//!
//! `GlyphFont` is a non-owning view that may or may not be bound to a
//! [`Font`]. It answers glyph and size queries and plots one character at a
//! text cursor, advancing the cursor afterwards. Clipping is left to the
//! framebuffer: every set bit is plotted, even if it lands off the canvas.

use crate::color::Color;
use crate::glyph::{Font, Glyph};
use crate::renderer::Primitives;
use crate::surface::FrameBuffer;
use log::{debug, trace};

/// Text cursor position: left end of the baseline of the next character.
///
/// Signed, since wrapping and glyph offsets push it off the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    pub x: i16,
    pub y: i16,
}

impl Cursor {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Moves to the start of the next line, `line_height` pixels down.
    pub fn new_line(&mut self, line_height: u8) {
        self.x = 0;
        self.y = self.y.saturating_add(i16::from(line_height));
    }
}

/// A view onto an optional [`Font`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphFont<'f> {
    font: Option<&'f Font<'f>>,
}

impl<'f> GlyphFont<'f> {
    pub fn new(font: &'f Font<'f>) -> Self {
        Self { font: Some(font) }
    }

    /// A view without a font. Every query misses and nothing is drawn.
    pub fn unbound() -> Self {
        Self { font: None }
    }

    pub fn font(&self) -> Option<&'f Font<'f>> {
        self.font
    }

    pub fn set_font(&mut self, font: Option<&'f Font<'f>>) {
        debug!("GlyphFont: font {}", if font.is_some() { "bound" } else { "unbound" });
        self.font = font;
    }

    /// Line height of the bound font, 0 without a font.
    pub fn height(&self) -> u8 {
        self.font.map_or(0, |font| font.y_advance)
    }

    /// Glyph of a printable character.
    ///
    /// Line feed and carriage return never have a glyph, even if the table
    /// covers them.
    pub fn glyph(&self, ch: u8) -> Option<&'f Glyph> {
        if ch == b'\n' || ch == b'\r' {
            return None;
        }
        self.font?.glyph(ch)
    }

    /// Size of the cell `ch` occupies: its advance and the font's line height.
    ///
    /// The height is the same for every character of a font, independent of
    /// the glyph's own bitmap height.
    pub fn char_bounding_box(&self, ch: u8) -> Option<(u16, u16)> {
        let glyph = self.glyph(ch)?;
        Some((u16::from(glyph.x_advance), u16::from(self.height())))
    }

    /// Draws `ch` at `cursor` and advances the cursor.
    ///
    /// A line feed only moves the cursor to the start of the next line.
    /// Characters without a glyph are skipped and leave the cursor alone.
    pub fn draw_char<C: Color>(
        &self,
        gfx: &mut dyn FrameBuffer<C>,
        cursor: &mut Cursor,
        ch: u8,
        color: C,
    ) {
        let Some(font) = self.font else {
            return;
        };

        if ch == b'\n' {
            cursor.new_line(font.y_advance);
            return;
        }

        let Some(glyph) = self.glyph(ch) else {
            trace!("GlyphFont: no glyph for {:#04X}, skipping", ch);
            return;
        };

        let right = i32::from(cursor.x) + i32::from(glyph.x_advance);
        if right >= 0 {
            draw_glyph(gfx, font.bitmap, glyph, *cursor, color);
        }

        cursor.x = cursor.x.saturating_add(i16::from(glyph.x_advance));
    }
}

/// Plots the set bits of `glyph` relative to `cursor`.
fn draw_glyph<C: Color>(
    gfx: &mut dyn FrameBuffer<C>,
    bitmap: &[u8],
    glyph: &Glyph,
    cursor: Cursor,
    color: C,
) {
    let origin_x = i32::from(cursor.x) + i32::from(glyph.x_offset);
    let origin_y = i32::from(cursor.y) + i32::from(glyph.y_offset);
    let offset = usize::from(glyph.bitmap_offset);
    let width = usize::from(glyph.width);

    for bit in 0..glyph.bit_count() {
        // Tables that are too short simply end the glyph early.
        let Some(&byte) = bitmap.get(offset + bit / 8) else {
            break;
        };
        if byte & (0x80 >> (bit % 8)) == 0 {
            continue;
        }

        let x = origin_x + (bit % width) as i32;
        let y = origin_y + (bit / width) as i32;
        if let (Ok(x), Ok(y)) = (i16::try_from(x), i16::try_from(y)) {
            gfx.draw_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests;
