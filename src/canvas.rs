// src/canvas.rs

//! Defines `Canvas`, a rectangular window into a parent framebuffer.
//!
//! Widgets and plugins draw into a canvas using coordinates relative to the
//! window's upper left corner. The canvas translates them by its offset and
//! keeps every write inside its own borders, so a misbehaving drawer cannot
//! touch pixels that belong to a neighbouring window. Run queries are
//! translated the same way and then answered by the parent, which may still
//! refuse them.

use crate::color::Color;
use crate::surface::{FrameBuffer, Run, RunMut};

/// A clipping window of `width x height` pixels at `(offs_x, offs_y)` inside
/// `parent`.
///
/// The window may hang over the parent's edges. Pixels outside the parent are
/// then dropped by the parent itself.
pub struct Canvas<'p, C: Color> {
    parent: &'p mut dyn FrameBuffer<C>,
    offs_x: i16,
    offs_y: i16,
    width: u16,
    height: u16,
}

impl<'p, C: Color> Canvas<'p, C> {
    pub fn new(
        parent: &'p mut dyn FrameBuffer<C>,
        offs_x: i16,
        offs_y: i16,
        width: u16,
        height: u16,
    ) -> Self {
        Self {
            parent,
            offs_x,
            offs_y,
            width,
            height,
        }
    }

    pub fn offset(&self) -> (i16, i16) {
        (self.offs_x, self.offs_y)
    }

    /// Moves the window inside the parent.
    pub fn set_offset(&mut self, offs_x: i16, offs_y: i16) {
        self.offs_x = offs_x;
        self.offs_y = offs_y;
    }

    /// Resizes the window. Pixels already drawn stay in the parent.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Translates a window coordinate to the parent, or `None` if it lies
    /// outside the window or the translation leaves the `i16` range.
    fn to_parent(&self, x: i16, y: i16) -> Option<(i16, i16)> {
        if x < 0 || y < 0 || x as u16 >= self.width || y as u16 >= self.height {
            return None;
        }
        Some((x.checked_add(self.offs_x)?, y.checked_add(self.offs_y)?))
    }

    fn fits_x(&self, x: i16, length: u16) -> bool {
        x >= 0 && u32::from(x as u16) + u32::from(length) <= u32::from(self.width)
    }

    fn fits_y(&self, y: i16, length: u16) -> bool {
        y >= 0 && u32::from(y as u16) + u32::from(length) <= u32::from(self.height)
    }
}

impl<C: Color> FrameBuffer<C> for Canvas<'_, C> {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn color(&self, x: i16, y: i16) -> Option<&C> {
        let (abs_x, abs_y) = self.to_parent(x, y)?;
        self.parent.color(abs_x, abs_y)
    }

    fn color_mut(&mut self, x: i16, y: i16) -> Option<&mut C> {
        let (abs_x, abs_y) = self.to_parent(x, y)?;
        self.parent.color_mut(abs_x, abs_y)
    }

    fn set_pixel(&mut self, x: i16, y: i16, color: C) {
        if let Some((abs_x, abs_y)) = self.to_parent(x, y) {
            self.parent.set_pixel(abs_x, abs_y, color);
        }
    }

    fn run_x(&mut self, x: i16, y: i16, length: u16) -> Option<RunMut<'_, C>> {
        if !self.fits_x(x, length) {
            return None;
        }
        let (abs_x, abs_y) = self.to_parent(x, y)?;
        self.parent.run_x(abs_x, abs_y, length)
    }

    fn run_y(&mut self, x: i16, y: i16, length: u16) -> Option<RunMut<'_, C>> {
        if !self.fits_y(y, length) {
            return None;
        }
        let (abs_x, abs_y) = self.to_parent(x, y)?;
        self.parent.run_y(abs_x, abs_y, length)
    }

    fn run_x_ref(&self, x: i16, y: i16, length: u16) -> Option<Run<'_, C>> {
        if !self.fits_x(x, length) {
            return None;
        }
        let (abs_x, abs_y) = self.to_parent(x, y)?;
        self.parent.run_x_ref(abs_x, abs_y, length)
    }

    fn run_y_ref(&self, x: i16, y: i16, length: u16) -> Option<Run<'_, C>> {
        if !self.fits_y(y, length) {
            return None;
        }
        let (abs_x, abs_y) = self.to_parent(x, y)?;
        self.parent.run_y_ref(abs_x, abs_y, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use crate::renderer::Primitives;
    use test_log::test;

    #[test]
    fn drawing_is_translated_and_clipped_to_the_window() {
        let mut parent: Bitmap<u8> = Bitmap::new(8, 8);
        {
            let mut canvas = Canvas::new(&mut parent, 2, 3, 4, 2);
            canvas.fill_screen(1);
            canvas.set_pixel(4, 0, 9);
            canvas.set_pixel(-1, 0, 9);
            canvas.draw_line(0, 0, 20, 0, 5);
        }
        for y in 0..8i16 {
            for x in 0..8i16 {
                let expected = match (x, y) {
                    (2..=5, 3) => 5,
                    (2..=5, 4) => 1,
                    _ => 0,
                };
                assert_eq!(parent.color(x, y), Some(&expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn runs_outside_the_window_are_refused() {
        let mut parent: Bitmap<u8> = Bitmap::new(8, 8);
        let mut canvas = Canvas::new(&mut parent, 1, 1, 4, 4);
        assert!(canvas.run_x(0, 0, 4).is_some());
        assert!(canvas.run_x(1, 0, 4).is_none());
        assert!(canvas.run_y(3, 0, 4).is_some());
        assert!(canvas.run_y(3, 1, 4).is_none());
        assert!(canvas.run_x(0, 4, 1).is_none());
    }

    #[test]
    fn window_hanging_over_the_parent_defers_to_the_parent() {
        let mut parent: Bitmap<u8> = Bitmap::new(4, 4);
        {
            let mut canvas = Canvas::new(&mut parent, 2, 0, 4, 4);
            // Fits the window, but not the parent.
            assert!(canvas.run_x(0, 0, 4).is_none());
            canvas.set_pixel(1, 1, 3);
            canvas.set_pixel(2, 1, 3);
        }
        assert_eq!(parent.color(3, 1), Some(&3));
        assert_eq!(parent.pixels().iter().filter(|&&p| p == 3).count(), 1);
    }

    #[test]
    fn moved_and_resized_window_draws_at_its_new_place() {
        let mut parent: Bitmap<u8> = Bitmap::new(8, 8);
        {
            let mut canvas = Canvas::new(&mut parent, 0, 0, 2, 2);
            canvas.set_offset(5, 6);
            canvas.set_size(3, 1);
            assert_eq!(canvas.offset(), (5, 6));
            assert_eq!((canvas.width(), canvas.height()), (3, 1));

            canvas.fill_screen(4);
            canvas.set_pixel(0, 1, 9);
        }
        for y in 0..8i16 {
            for x in 0..8i16 {
                let expected = if y == 6 && (5..8).contains(&x) { 4 } else { 0 };
                assert_eq!(parent.color(x, y), Some(&expected), "pixel ({x}, {y})");
            }
        }
    }
}
