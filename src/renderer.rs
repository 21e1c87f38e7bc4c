// src/renderer.rs

//! This module defines the drawing primitives.
//!
//! `Primitives` is an extension trait over [`FrameBuffer`]: every surface that
//! can hand out pixels and runs gets lines, rectangles, circles, fills and
//! blits for free. The primitives never look inside a color and never write
//! through anything but the surface's own bounds-checked accessors.
//!
//! Clipping happens here, not in the surface. Horizontal and vertical spans
//! are clipped against the canvas with [`adapt_coord_and_length`] before a run
//! is requested, so a run is only asked for when it is expected to fit. If the
//! surface still refuses it, the whole span is skipped. Lines and circles plot
//! single pixels and rely on `set_pixel` ignoring coordinates off the canvas.

use crate::color::Color;
use crate::surface::FrameBuffer;
use log::trace;

/// Clips the one-dimensional window `[coord, coord + length)` to `[0, max)`.
///
/// The result `(coord', length')` always satisfies `coord' >= 0` and
/// `coord' + length' <= max`. A window that does not overlap `[0, max)` at
/// all comes back with `length' == 0`. Positions past `i16::MAX` cannot be
/// addressed, so `max` is capped there.
pub fn adapt_coord_and_length(coord: i16, length: u16, max: u16) -> (i16, u16) {
    let limit = i32::from(max).min(i32::from(i16::MAX));
    let start = i32::from(coord);
    let end = start + i32::from(length);

    let clipped_start = start.clamp(0, limit);
    let clipped_end = end.clamp(0, limit);

    if clipped_end <= clipped_start {
        return (clipped_start as i16, 0);
    }
    (clipped_start as i16, (clipped_end - clipped_start) as u16)
}

/// Moves `coord` by `delta`, or `None` if the result leaves the `i16` range.
/// Such a position is off every canvas.
fn shift(coord: i16, delta: i32) -> Option<i16> {
    i16::try_from(i32::from(coord) + delta).ok()
}

/// Drawing primitives available on every [`FrameBuffer`].
///
/// All operations are total. Coordinates may be negative or beyond the
/// canvas; the visible part is drawn and the rest is dropped.
pub trait Primitives<C: Color>: FrameBuffer<C> {
    /// Draws a single pixel.
    fn draw_pixel(&mut self, x: i16, y: i16, color: C) {
        self.set_pixel(x, y, color);
    }

    /// Draws a horizontal line of `width` pixels starting at `(x, y)`.
    fn draw_hline(&mut self, x: i16, y: i16, width: u16, color: C) {
        if y < 0 || y as u16 >= self.height() {
            return;
        }
        let (x, width) = adapt_coord_and_length(x, width, self.width());
        if width == 0 {
            return;
        }
        match self.run_x(x, y, width) {
            Some(mut run) => run.fill(color),
            None => trace!("Primitives: run_x({}, {}, {}) unavailable, skipping hline", x, y, width),
        }
    }

    /// Draws a vertical line of `height` pixels starting at `(x, y)`.
    fn draw_vline(&mut self, x: i16, y: i16, height: u16, color: C) {
        if x < 0 || x as u16 >= self.width() {
            return;
        }
        let (y, height) = adapt_coord_and_length(y, height, self.height());
        if height == 0 {
            return;
        }
        match self.run_y(x, y, height) {
            Some(mut run) => run.fill(color),
            None => trace!("Primitives: run_y({}, {}, {}) unavailable, skipping vline", x, y, height),
        }
    }

    /// Draws a line between two points, both endpoints included.
    ///
    /// Uses the integer Bresenham algorithm and handles every octant.
    fn draw_line(&mut self, xs: i16, ys: i16, xe: i16, ye: i16, color: C) {
        let (mut x, mut y) = (i32::from(xs), i32::from(ys));
        let (x_end, y_end) = (i32::from(xe), i32::from(ye));

        let dx = (x_end - x).abs();
        let dy = -(y_end - y).abs();
        let step_x = if x < x_end { 1 } else { -1 };
        let step_y = if y < y_end { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            // Every point lies between the endpoints, so it fits in i16.
            self.draw_pixel(x as i16, y as i16, color);

            if x == x_end && y == y_end {
                break;
            }

            let err2 = 2 * err;
            if err2 >= dy {
                err += dy;
                x += step_x;
            }
            if err2 <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    /// Draws the outline of a rectangle.
    ///
    /// # Arguments
    ///
    /// * `x`, `y`: upper left corner.
    /// * `width`, `height`: outer size in pixels. A zero size draws nothing.
    /// * `color`: outline color.
    fn draw_rectangle(&mut self, x: i16, y: i16, width: u16, height: u16, color: C) {
        if width == 0 || height == 0 {
            return;
        }

        self.draw_hline(x, y, width, color);

        if height > 1 {
            if let Some(bottom) = shift(y, i32::from(height) - 1) {
                self.draw_hline(x, bottom, width, color);
            }
        }

        if height > 2 {
            let Some(top) = shift(y, 1) else {
                return;
            };
            self.draw_vline(x, top, height - 2, color);
            if width > 1 {
                if let Some(right) = shift(x, i32::from(width) - 1) {
                    self.draw_vline(right, top, height - 2, color);
                }
            }
        }
    }

    /// Draws the outline of a circle with the midpoint algorithm.
    fn draw_circle(&mut self, x0: i16, y0: i16, radius: u16, color: C) {
        let (cx, cy) = (i32::from(x0), i32::from(y0));
        let r = i32::from(radius);

        let plot = |surface: &mut Self, px: i32, py: i32| {
            if let (Ok(px), Ok(py)) = (i16::try_from(px), i16::try_from(py)) {
                surface.draw_pixel(px, py, color);
            }
        };

        plot(self, cx, cy + r);
        plot(self, cx, cy - r);
        plot(self, cx + r, cy);
        plot(self, cx - r, cy);

        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let (mut x, mut y) = (0, r);

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            for (dx, dy) in [(x, y), (y, x)] {
                plot(self, cx + dx, cy + dy);
                plot(self, cx - dx, cy + dy);
                plot(self, cx + dx, cy - dy);
                plot(self, cx - dx, cy - dy);
            }
        }
    }

    /// Draws a filled circle.
    ///
    /// Walks the same midpoint steps as [`Primitives::draw_circle`] and draws a
    /// horizontal span for every symmetric scanline, so the filled area always
    /// covers the outline.
    fn fill_circle(&mut self, x0: i16, y0: i16, radius: u16, color: C) {
        let (cx, cy) = (i32::from(x0), i32::from(y0));
        let r = i32::from(radius);

        // Span of `half * 2 + 1` pixels centred on the circle, on row `cy + dy`.
        // Only the part right of x = 0 can be visible.
        let span = |surface: &mut Self, dy: i32, half: i32| {
            let Ok(row) = i16::try_from(cy + dy) else {
                return;
            };
            let left = (cx - half).max(0);
            let right = (cx + half).min(i32::from(i16::MAX));
            if right >= left {
                surface.draw_hline(left as i16, row, (right - left + 1) as u16, color);
            }
        };

        span(self, 0, r);

        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let (mut x, mut y) = (0, r);

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            span(self, y, x);
            span(self, -y, x);
            span(self, x, y);
            span(self, -x, y);
        }
    }

    /// Fills a rectangle.
    ///
    /// The area is clipped on both axes first. It is then filled line by line
    /// along whichever axis needs fewer lines.
    fn fill_rect(&mut self, x: i16, y: i16, width: u16, height: u16, color: C) {
        let (x, width) = adapt_coord_and_length(x, width, self.width());
        let (y, height) = adapt_coord_and_length(y, height, self.height());
        if width == 0 || height == 0 {
            return;
        }

        // Clipped coordinates end at or before i16::MAX, so the sums below
        // cannot overflow.
        if height <= width {
            for row in 0..height {
                self.draw_hline(x, y + row as i16, width, color);
            }
        } else {
            for column in 0..width {
                self.draw_vline(x + column as i16, y, height, color);
            }
        }
    }

    /// Fills the whole canvas.
    fn fill_screen(&mut self, color: C) {
        let (width, height) = (self.width(), self.height());
        self.fill_rect(0, 0, width, height, color);
    }

    /// Copies `source` with its upper left corner placed at `(x, y)`.
    ///
    /// Only the part that overlaps this canvas is copied. The copy walks
    /// whichever axis of the overlap is longer, one run per line on both
    /// sides. Every line is checked before anything is written: if the source
    /// or this canvas refuses a single run, nothing is drawn at all.
    fn draw_bitmap(&mut self, x: i16, y: i16, source: &dyn FrameBuffer<C>) {
        let (dst_x, width) = adapt_coord_and_length(x, source.width(), self.width());
        let (dst_y, height) = adapt_coord_and_length(y, source.height(), self.height());
        if width == 0 || height == 0 {
            return;
        }

        // Offset of the visible part inside the source.
        let (Ok(src_x), Ok(src_y)) = (
            i16::try_from(i32::from(dst_x) - i32::from(x)),
            i16::try_from(i32::from(dst_y) - i32::from(y)),
        ) else {
            return;
        };

        let along_x = width >= height;
        let (lines, length) = if along_x { (height, width) } else { (width, height) };

        // First pixel of line `i` in this canvas and in the source. Clipped
        // destination coordinates end at or before i16::MAX.
        let line_start = |i: i16| -> Option<((i16, i16), (i16, i16))> {
            if along_x {
                Some(((dst_x, dst_y + i), (src_x, shift(src_y, i32::from(i))?)))
            } else {
                Some(((dst_x + i, dst_y), (shift(src_x, i32::from(i))?, src_y)))
            }
        };

        for i in 0..lines as i16 {
            let Some(((dx, dy), (sx, sy))) = line_start(i) else {
                return;
            };
            let source_ready = if along_x {
                source.run_x_ref(sx, sy, length).is_some()
            } else {
                source.run_y_ref(sx, sy, length).is_some()
            };
            let ready = source_ready
                && if along_x {
                    self.run_x(dx, dy, length).is_some()
                } else {
                    self.run_y(dx, dy, length).is_some()
                };
            if !ready {
                trace!(
                    "Primitives: run for line {} of a {}x{} blit unavailable, skipping blit",
                    i,
                    width,
                    height
                );
                return;
            }
        }

        for i in 0..lines as i16 {
            let Some(((dx, dy), (sx, sy))) = line_start(i) else {
                return;
            };
            let (src, dst) = if along_x {
                (source.run_x_ref(sx, sy, length), self.run_x(dx, dy, length))
            } else {
                (source.run_y_ref(sx, sy, length), self.run_y(dx, dy, length))
            };
            if let (Some(src), Some(mut dst)) = (src, dst) {
                dst.copy_from(&src);
            }
        }
    }

    /// Copies `source` to the origin. The overlap of both canvases is copied.
    fn copy(&mut self, source: &dyn FrameBuffer<C>) {
        self.draw_bitmap(0, 0, source);
    }
}

impl<C: Color, T: FrameBuffer<C> + ?Sized> Primitives<C> for T {}
