// src/text.rs

//! Cursor-driven text layout.
//!
//! `TextLayout` owns the text cursor, the text color and the wrap flag, and
//! walks strings byte by byte through a [`GlyphFont`]. Text is treated as a
//! sequence of single-byte character codes matching the font table; a NUL
//! byte ends the text early.

use crate::color::Color;
use crate::font::{Cursor, GlyphFont};
use crate::glyph::Font;
use crate::surface::FrameBuffer;
use log::trace;

/// Text state of one widget: where the next character goes and how it looks.
#[derive(Debug, Clone, Copy)]
pub struct TextLayout<'f, C: Color> {
    cursor: Cursor,
    text_color: C,
    wrap: bool,
    font: GlyphFont<'f>,
}

impl<C: Color> Default for TextLayout<'_, C> {
    fn default() -> Self {
        Self {
            cursor: Cursor::default(),
            text_color: C::default(),
            wrap: false,
            font: GlyphFont::unbound(),
        }
    }
}

impl<'f, C: Color> TextLayout<'f, C> {
    /// Creates a layout bound to `font`, cursor at the origin and wrapping off.
    pub fn new(font: &'f Font<'f>, text_color: C) -> Self {
        Self {
            text_color,
            font: GlyphFont::new(font),
            ..Self::default()
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn set_cursor(&mut self, x: i16, y: i16) {
        self.cursor = Cursor::new(x, y);
    }

    pub fn text_color(&self) -> C {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: C) {
        self.text_color = color;
    }

    pub fn is_text_wrap_enabled(&self) -> bool {
        self.wrap
    }

    pub fn set_text_wrap(&mut self, enabled: bool) {
        self.wrap = enabled;
    }

    pub fn font(&self) -> &GlyphFont<'f> {
        &self.font
    }

    pub fn set_font(&mut self, font: Option<&'f Font<'f>>) {
        self.font.set_font(font);
    }

    /// Size of the box `text` occupies when laid out in lines of at most
    /// `max_line_width` pixels.
    ///
    /// Lines only break at `'\n'`, and additionally before a character that
    /// would overflow `max_line_width` when wrapping is enabled. The first
    /// byte of the text always opens a line, whether or not it has a glyph.
    ///
    /// Returns `None` without a bound font.
    pub fn text_bounding_box(&self, max_line_width: u16, text: &str) -> Option<(u16, u16)> {
        let line_height = u16::from(self.font.font()?.y_advance);
        let mut box_width: u16 = 0;
        let mut box_height: u16 = 0;
        let mut line_width: u16 = 0;

        for (index, ch) in text.bytes().take_while(|&ch| ch != 0).enumerate() {
            if index == 0 {
                box_height = box_height.saturating_add(line_height);
            }

            if ch == b'\n' {
                box_width = box_width.max(line_width);
                line_width = 0;
                box_height = box_height.saturating_add(line_height);
            } else if let Some((char_width, char_height)) = self.font.char_bounding_box(ch) {
                if self.wrap && u32::from(line_width) + u32::from(char_width) > u32::from(max_line_width) {
                    box_width = box_width.max(line_width);
                    line_width = 0;
                    box_height = box_height.saturating_add(char_height);
                }
                line_width = line_width.saturating_add(char_width);
            }
        }

        Some((box_width.max(line_width), box_height))
    }

    /// Draws one character at the cursor in the text color.
    ///
    /// With wrapping enabled, a character that would cross the right edge of
    /// `gfx` first moves the cursor to the start of the next line.
    pub fn draw_char(&mut self, gfx: &mut dyn FrameBuffer<C>, ch: u8) {
        if self.font.font().is_none() {
            return;
        }

        if self.wrap {
            if let Some((char_width, char_height)) = self.font.char_bounding_box(ch) {
                let right = i32::from(self.cursor.x) + i32::from(char_width);
                if right > i32::from(gfx.width()) {
                    trace!("TextLayout: wrapping before {:#04X} at x {}", ch, self.cursor.x);
                    self.cursor.x = 0;
                    self.cursor.y = self.cursor.y.saturating_add_unsigned(char_height);
                }
            }
        }

        self.font.draw_char(gfx, &mut self.cursor, ch, self.text_color);
    }

    /// Draws `text` character by character, stopping at a NUL byte.
    pub fn draw_text(&mut self, gfx: &mut dyn FrameBuffer<C>, text: &str) {
        if self.font.font().is_none() {
            return;
        }
        for ch in text.bytes().take_while(|&ch| ch != 0) {
            self.draw_char(gfx, ch);
        }
    }
}
