// src/bitmap.rs

//! In-memory pixel buffers.
//!
//! `Bitmap` owns a heap buffer whose size is chosen at runtime and can be
//! released and re-created. `StaticBitmap` stores its pixels inline with the
//! dimensions fixed at compile time. Both are row-major and serve runs along
//! either axis, so every primitive can draw into them and both can be used as
//! the source of a blit.

use crate::color::Color;
use crate::surface::{locate_run, Axis, FrameBuffer, Run, RunMut};
use log::debug;

/// Heap-allocated, row-major pixel buffer.
///
/// A bitmap without pixels (zero width or height, or after [`Bitmap::release`])
/// reports a size of 0x0 and ignores every access.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bitmap<C: Color> {
    pixels: Vec<C>,
    width: u16,
    height: u16,
}

impl<C: Color> Bitmap<C> {
    /// Creates a bitmap filled with `C::default()`.
    pub fn new(width: u16, height: u16) -> Self {
        let mut bitmap = Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
        };
        bitmap.create(width, height);
        bitmap
    }

    /// Allocates pixels for an empty bitmap.
    ///
    /// Returns `false` if the bitmap is already allocated or the requested
    /// size has no pixels.
    pub fn create(&mut self, width: u16, height: u16) -> bool {
        if self.is_allocated() || width == 0 || height == 0 {
            return false;
        }
        self.pixels = vec![C::default(); usize::from(width) * usize::from(height)];
        self.width = width;
        self.height = height;
        debug!("Bitmap: allocated {}x{} pixels", width, height);
        true
    }

    /// Frees the pixel buffer. The bitmap becomes 0x0.
    pub fn release(&mut self) {
        if self.is_allocated() {
            debug!("Bitmap: releasing {}x{} pixels", self.width, self.height);
        }
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;
    }

    pub fn is_allocated(&self) -> bool {
        !self.pixels.is_empty()
    }

    /// Raw pixels in row-major order.
    pub fn pixels(&self) -> &[C] {
        &self.pixels
    }

    fn index(&self, x: i16, y: i16) -> Option<usize> {
        pixel_index(x, y, self.width, self.height)
    }
}

impl<C: Color> FrameBuffer<C> for Bitmap<C> {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn color(&self, x: i16, y: i16) -> Option<&C> {
        self.index(x, y).and_then(|idx| self.pixels.get(idx))
    }

    fn color_mut(&mut self, x: i16, y: i16) -> Option<&mut C> {
        self.index(x, y).and_then(|idx| self.pixels.get_mut(idx))
    }

    fn run_x(&mut self, x: i16, y: i16, length: u16) -> Option<RunMut<'_, C>> {
        let (start, stride) = locate_run(Axis::X, x, y, length, self.width, self.height)?;
        RunMut::new(&mut self.pixels, start, stride, usize::from(length))
    }

    fn run_y(&mut self, x: i16, y: i16, length: u16) -> Option<RunMut<'_, C>> {
        let (start, stride) = locate_run(Axis::Y, x, y, length, self.width, self.height)?;
        RunMut::new(&mut self.pixels, start, stride, usize::from(length))
    }

    fn run_x_ref(&self, x: i16, y: i16, length: u16) -> Option<Run<'_, C>> {
        let (start, stride) = locate_run(Axis::X, x, y, length, self.width, self.height)?;
        Run::new(&self.pixels, start, stride, usize::from(length))
    }

    fn run_y_ref(&self, x: i16, y: i16, length: u16) -> Option<Run<'_, C>> {
        let (start, stride) = locate_run(Axis::Y, x, y, length, self.width, self.height)?;
        Run::new(&self.pixels, start, stride, usize::from(length))
    }
}

/// Pixel buffer with compile-time dimensions, stored inline.
///
/// Both dimensions must fit in `u16`; larger ones fail to compile.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticBitmap<C: Color, const W: usize, const H: usize> {
    pixels: [[C; W]; H],
}

impl<C: Color, const W: usize, const H: usize> StaticBitmap<C, W, H> {
    const DIMENSIONS_FIT: () = assert!(
        W <= u16::MAX as usize && H <= u16::MAX as usize,
        "StaticBitmap dimensions must fit in u16"
    );
    const WIDTH: u16 = W as u16;
    const HEIGHT: u16 = H as u16;

    pub fn new() -> Self {
        let () = Self::DIMENSIONS_FIT;
        Self {
            pixels: [[C::default(); W]; H],
        }
    }

    /// Raw pixels in row-major order.
    pub fn pixels(&self) -> &[C] {
        self.pixels.as_flattened()
    }
}

impl<C: Color, const W: usize, const H: usize> Default for StaticBitmap<C, W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Color, const W: usize, const H: usize> FrameBuffer<C> for StaticBitmap<C, W, H> {
    fn width(&self) -> u16 {
        Self::WIDTH
    }

    fn height(&self) -> u16 {
        Self::HEIGHT
    }

    fn color(&self, x: i16, y: i16) -> Option<&C> {
        let idx = pixel_index(x, y, Self::WIDTH, Self::HEIGHT)?;
        self.pixels.as_flattened().get(idx)
    }

    fn color_mut(&mut self, x: i16, y: i16) -> Option<&mut C> {
        let idx = pixel_index(x, y, Self::WIDTH, Self::HEIGHT)?;
        self.pixels.as_flattened_mut().get_mut(idx)
    }

    fn run_x(&mut self, x: i16, y: i16, length: u16) -> Option<RunMut<'_, C>> {
        let (start, stride) = locate_run(Axis::X, x, y, length, Self::WIDTH, Self::HEIGHT)?;
        RunMut::new(self.pixels.as_flattened_mut(), start, stride, usize::from(length))
    }

    fn run_y(&mut self, x: i16, y: i16, length: u16) -> Option<RunMut<'_, C>> {
        let (start, stride) = locate_run(Axis::Y, x, y, length, Self::WIDTH, Self::HEIGHT)?;
        RunMut::new(self.pixels.as_flattened_mut(), start, stride, usize::from(length))
    }

    fn run_x_ref(&self, x: i16, y: i16, length: u16) -> Option<Run<'_, C>> {
        let (start, stride) = locate_run(Axis::X, x, y, length, Self::WIDTH, Self::HEIGHT)?;
        Run::new(self.pixels.as_flattened(), start, stride, usize::from(length))
    }

    fn run_y_ref(&self, x: i16, y: i16, length: u16) -> Option<Run<'_, C>> {
        let (start, stride) = locate_run(Axis::Y, x, y, length, Self::WIDTH, Self::HEIGHT)?;
        Run::new(self.pixels.as_flattened(), start, stride, usize::from(length))
    }
}

fn pixel_index(x: i16, y: i16, width: u16, height: u16) -> Option<usize> {
    if x < 0 || y < 0 || x as u16 >= width || y as u16 >= height {
        return None;
    }
    Some(x as usize + y as usize * usize::from(width))
}
