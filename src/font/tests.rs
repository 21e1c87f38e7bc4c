// src/font/tests.rs

#[cfg(test)]
mod font_tests {
    use crate::bitmap::Bitmap;
    use crate::font::{Cursor, GlyphFont};
    use crate::fonts::TOM_THUMB;
    use crate::glyph::{Font, Glyph};
    use crate::surface::{FrameBuffer, Run, RunMut};
    use std::collections::BTreeSet;
    use test_log::test;

    // --- PlotLog Definition ---
    /// Records every plotted coordinate, including ones off the canvas.
    #[derive(Default)]
    struct PlotLog {
        plots: Vec<(i16, i16, u8)>,
    }

    impl PlotLog {
        fn points(&self) -> BTreeSet<(i16, i16)> {
            self.plots.iter().map(|&(x, y, _)| (x, y)).collect()
        }
    }

    impl FrameBuffer<u8> for PlotLog {
        fn width(&self) -> u16 {
            10
        }

        fn height(&self) -> u16 {
            10
        }

        fn color(&self, _x: i16, _y: i16) -> Option<&u8> {
            None
        }

        fn color_mut(&mut self, _x: i16, _y: i16) -> Option<&mut u8> {
            None
        }

        fn set_pixel(&mut self, x: i16, y: i16, color: u8) {
            self.plots.push((x, y, color));
        }

        fn run_x(&mut self, _x: i16, _y: i16, _length: u16) -> Option<RunMut<'_, u8>> {
            None
        }

        fn run_y(&mut self, _x: i16, _y: i16, _length: u16) -> Option<RunMut<'_, u8>> {
            None
        }

        fn run_x_ref(&self, _x: i16, _y: i16, _length: u16) -> Option<Run<'_, u8>> {
            None
        }

        fn run_y_ref(&self, _x: i16, _y: i16, _length: u16) -> Option<Run<'_, u8>> {
            None
        }
    }

    // --- A single-glyph font ---
    static A_BITMAP: [u8; 2] = [0xD7, 0xDA];
    static A_GLYPHS: [Glyph; 1] = [Glyph::new(0, 3, 5, 4, 0, -5)];
    static A_FONT: Font<'static> = Font {
        bitmap: &A_BITMAP,
        glyphs: &A_GLYPHS,
        first_char: b'A',
        last_char: b'A',
        y_advance: 6,
    };

    fn a_pixels(dx: i16, dy: i16) -> BTreeSet<(i16, i16)> {
        // Rows of the 'A' glyph, most significant bit on the left.
        let rows = ["##.", "#.#", "###", "#.#", "#.#"];
        let mut set = BTreeSet::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.chars().enumerate() {
                if cell == '#' {
                    set.insert((x as i16 + dx, y as i16 + dy));
                }
            }
        }
        set
    }

    #[test]
    fn draw_char_unpacks_msb_first_and_advances() {
        let font = GlyphFont::new(&A_FONT);
        let mut log = PlotLog::default();
        let mut cursor = Cursor::new(0, 0);

        font.draw_char(&mut log, &mut cursor, b'A', 7);

        assert_eq!(log.points(), a_pixels(0, -5));
        assert_eq!(log.plots.len(), 12);
        assert!(log.plots.iter().all(|&(_, _, c)| c == 7));
        assert_eq!(cursor, Cursor::new(4, 0));
    }

    #[test]
    fn newline_moves_cursor_without_plotting() {
        let font = GlyphFont::new(&A_FONT);
        let mut log = PlotLog::default();
        let mut cursor = Cursor::new(5, 2);

        font.draw_char(&mut log, &mut cursor, b'\n', 1);

        assert!(log.plots.is_empty());
        assert_eq!(cursor, Cursor::new(0, 8));
    }

    #[test]
    fn missing_glyph_leaves_cursor_alone() {
        let font = GlyphFont::new(&A_FONT);
        let mut log = PlotLog::default();
        let mut cursor = Cursor::new(3, 3);

        for ch in [b'B', b'\r', 0x00, 0xFF] {
            font.draw_char(&mut log, &mut cursor, ch, 1);
        }

        assert!(log.plots.is_empty());
        assert_eq!(cursor, Cursor::new(3, 3));
    }

    #[test]
    fn unbound_font_draws_nothing() {
        let font = GlyphFont::unbound();
        let mut log = PlotLog::default();
        let mut cursor = Cursor::new(1, 1);

        font.draw_char(&mut log, &mut cursor, b'\n', 1);
        font.draw_char(&mut log, &mut cursor, b'A', 1);

        assert!(log.plots.is_empty());
        assert_eq!(cursor, Cursor::new(1, 1));
        assert_eq!(font.height(), 0);
        assert_eq!(font.char_bounding_box(b'A'), None);
    }

    #[test]
    fn glyph_partly_left_of_canvas_is_still_plotted() {
        let font = GlyphFont::new(&A_FONT);

        let mut log = PlotLog::default();
        let mut cursor = Cursor::new(-4, 5);
        font.draw_char(&mut log, &mut cursor, b'A', 1);
        assert_eq!(log.points(), a_pixels(-4, 0));
        assert_eq!(cursor.x, 0);

        let mut log = PlotLog::default();
        let mut cursor = Cursor::new(-5, 5);
        font.draw_char(&mut log, &mut cursor, b'A', 1);
        assert!(log.plots.is_empty());
        assert_eq!(cursor.x, -1);
    }

    #[test]
    fn glyph_lookup_skips_control_characters() {
        let font = GlyphFont::new(&TOM_THUMB);
        assert!(font.glyph(b'\n').is_none());
        assert!(font.glyph(b'\r').is_none());
        assert!(font.glyph(0x1F).is_none());
        assert!(font.glyph(0x7F).is_none());
        assert_eq!(font.glyph(b'A'), Some(&Glyph::new(57, 3, 5, 4, 0, -5)));
    }

    #[test]
    fn bounding_box_uses_line_height() {
        let font = GlyphFont::new(&TOM_THUMB);
        assert_eq!(font.char_bounding_box(b'A'), Some((4, 6)));
        assert_eq!(font.char_bounding_box(b'M'), Some((6, 6)));
        // '.' is a single pixel, but the cell is a full line high.
        assert_eq!(font.char_bounding_box(b'.'), Some((2, 6)));
        assert_eq!(font.char_bounding_box(b'\n'), None);
        assert_eq!(font.height(), 6);
    }

    #[test]
    fn set_font_rebinds_the_view() {
        let mut font = GlyphFont::unbound();
        assert!(font.font().is_none());
        font.set_font(Some(&TOM_THUMB));
        assert_eq!(font.height(), 6);
        font.set_font(None);
        assert!(font.glyph(b'A').is_none());
    }

    #[test]
    fn tom_thumb_renders_into_a_bitmap() {
        let font = GlyphFont::new(&TOM_THUMB);
        let mut bitmap: Bitmap<u8> = Bitmap::new(8, 6);
        let mut cursor = Cursor::new(0, 5);

        font.draw_char(&mut bitmap, &mut cursor, b'A', 1);
        font.draw_char(&mut bitmap, &mut cursor, b'A', 2);

        let first: BTreeSet<_> = a_pixels(0, 0);
        let second: BTreeSet<_> = a_pixels(4, 0);
        for y in 0..6i16 {
            for x in 0..8i16 {
                let expected = if first.contains(&(x, y)) {
                    1
                } else if second.contains(&(x, y)) {
                    2
                } else {
                    0
                };
                assert_eq!(bitmap.color(x, y), Some(&expected), "pixel ({x}, {y})");
            }
        }
        assert_eq!(cursor, Cursor::new(8, 5));
    }
}
