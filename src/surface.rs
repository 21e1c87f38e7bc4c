// src/surface.rs

//! Defines the `FrameBuffer` capability consumed by the drawing primitives,
//! and the strided run views that give bounds-checked access to a contiguous
//! stretch of pixels along one axis.
//!
//! A run is described by a backing slice, the index of its first element and
//! the index distance between two neighbouring elements. Element `i` of a run
//! lives at `start + i * stride`. A run is only ever handed out when all of
//! its elements lie inside the backing slice; a surface that cannot serve the
//! full requested length answers `None` and the caller skips the operation.

use crate::color::Color;

/// Pixel storage a renderer can draw into.
///
/// Implementors must accept out-of-bounds coordinates in `set_pixel` as a
/// silent no-op. Line and circle rasterization routinely produces
/// coordinates outside the canvas.
pub trait FrameBuffer<C: Color> {
    /// Canvas width in pixels.
    fn width(&self) -> u16;

    /// Canvas height in pixels.
    fn height(&self) -> u16;

    /// Color at the given position, or `None` outside the canvas.
    fn color(&self, x: i16, y: i16) -> Option<&C>;

    /// Mutable access to the color at the given position, or `None` outside
    /// the canvas.
    fn color_mut(&mut self, x: i16, y: i16) -> Option<&mut C>;

    /// Writes a single pixel. Out-of-bounds coordinates are ignored.
    fn set_pixel(&mut self, x: i16, y: i16, color: C) {
        if let Some(pixel) = self.color_mut(x, y) {
            *pixel = color;
        }
    }

    /// A writable run of `length` pixels starting at `(x, y)` along the x-axis.
    fn run_x(&mut self, x: i16, y: i16, length: u16) -> Option<RunMut<'_, C>>;

    /// A writable run of `length` pixels starting at `(x, y)` along the y-axis.
    fn run_y(&mut self, x: i16, y: i16, length: u16) -> Option<RunMut<'_, C>>;

    /// A read-only run of `length` pixels starting at `(x, y)` along the x-axis.
    fn run_x_ref(&self, x: i16, y: i16, length: u16) -> Option<Run<'_, C>>;

    /// A read-only run of `length` pixels starting at `(x, y)` along the y-axis.
    fn run_y_ref(&self, x: i16, y: i16, length: u16) -> Option<Run<'_, C>>;
}

/// Direction of a run inside a row-major pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Locates a run inside a row-major buffer of `width * height` pixels.
///
/// Returns `(start index, stride)` when the whole run fits, otherwise `None`.
/// A zero-length run is only granted at a coordinate that is itself on the
/// canvas.
pub fn locate_run(
    axis: Axis,
    x: i16,
    y: i16,
    length: u16,
    width: u16,
    height: u16,
) -> Option<(usize, usize)> {
    if x < 0 || y < 0 {
        return None;
    }
    let (x, y) = (x as usize, y as usize);
    let (width, height, length) = (usize::from(width), usize::from(height), usize::from(length));

    if x >= width || y >= height {
        return None;
    }

    match axis {
        Axis::X if x + length <= width => Some((x + y * width, 1)),
        Axis::Y if y + length <= height => Some((x + y * width, width)),
        _ => None,
    }
}

/// Read-only strided view over a pixel slice.
#[derive(Debug, Clone, Copy)]
pub struct Run<'a, C> {
    pixels: &'a [C],
    start: usize,
    stride: usize,
    len: usize,
}

impl<'a, C: Color> Run<'a, C> {
    /// Creates a view, or `None` if any element would fall outside `pixels`
    /// or the stride is zero.
    pub fn new(pixels: &'a [C], start: usize, stride: usize, len: usize) -> Option<Self> {
        if !run_fits(pixels.len(), start, stride, len) {
            return None;
        }
        Some(Self {
            pixels,
            start,
            stride,
            len,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index distance between two neighbouring elements in the backing slice.
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn get(&self, index: usize) -> Option<&C> {
        if index < self.len {
            self.pixels.get(self.start + index * self.stride)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a C> + 'a {
        let (pixels, start, stride, len) = (self.pixels, self.start, self.stride, self.len);
        pixels[start..].iter().step_by(stride).take(len)
    }
}

/// Writable strided view over a pixel slice.
#[derive(Debug)]
pub struct RunMut<'a, C> {
    pixels: &'a mut [C],
    start: usize,
    stride: usize,
    len: usize,
}

impl<'a, C: Color> RunMut<'a, C> {
    /// Creates a view, or `None` if any element would fall outside `pixels`
    /// or the stride is zero.
    pub fn new(pixels: &'a mut [C], start: usize, stride: usize, len: usize) -> Option<Self> {
        if !run_fits(pixels.len(), start, stride, len) {
            return None;
        }
        Some(Self {
            pixels,
            start,
            stride,
            len,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn get(&self, index: usize) -> Option<&C> {
        if index < self.len {
            self.pixels.get(self.start + index * self.stride)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut C> {
        if index < self.len {
            self.pixels.get_mut(self.start + index * self.stride)
        } else {
            None
        }
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut C> + '_ {
        self.pixels[self.start..]
            .iter_mut()
            .step_by(self.stride)
            .take(self.len)
    }

    /// Sets every element of the run to `color`.
    pub fn fill(&mut self, color: C) {
        for pixel in self.iter_mut() {
            *pixel = color;
        }
    }

    /// Copies `source` element by element. Copies `min(self.len, source.len)`
    /// elements.
    pub fn copy_from(&mut self, source: &Run<'_, C>) {
        for (dst, src) in self.iter_mut().zip(source.iter()) {
            *dst = *src;
        }
    }
}

fn run_fits(slice_len: usize, start: usize, stride: usize, len: usize) -> bool {
    if stride == 0 {
        return false;
    }
    if len == 0 {
        return start <= slice_len;
    }
    (len - 1)
        .checked_mul(stride)
        .and_then(|span| span.checked_add(start))
        .is_some_and(|last| last < slice_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn run_rejects_views_past_the_slice() {
        let pixels = [0u8; 12];
        assert!(Run::new(&pixels, 0, 4, 3).is_some());
        assert!(Run::new(&pixels, 1, 4, 3).is_some());
        assert!(Run::new(&pixels, 4, 4, 3).is_none());
        assert!(Run::new(&pixels, 0, 0, 3).is_none());
        assert!(Run::new(&pixels, 12, 1, 0).is_some());
        assert!(Run::new(&pixels, 13, 1, 0).is_none());
    }

    #[test]
    fn run_mut_addresses_strided_elements() {
        let mut pixels = [0u16; 12];
        {
            let mut run = RunMut::new(&mut pixels, 1, 4, 3).expect("run fits");
            assert_eq!(run.len(), 3);
            run.fill(7);
            *run.get_mut(2).expect("in range") = 9;
            assert!(run.get_mut(3).is_none());
        }
        assert_eq!(pixels, [0, 7, 0, 0, 0, 7, 0, 0, 0, 9, 0, 0]);
    }

    #[test]
    fn get_reads_only_inside_the_run() {
        let mut pixels = [1u8, 2, 3, 4, 5, 6];
        let run = Run::new(&pixels, 1, 2, 3).expect("run fits");
        assert!(!run.is_empty());
        assert_eq!(run.get(0), Some(&2));
        assert_eq!(run.get(2), Some(&6));
        assert_eq!(run.get(3), None);
        assert!(Run::new(&pixels, 6, 1, 0).expect("empty run fits").is_empty());

        let run = RunMut::new(&mut pixels, 0, 3, 2).expect("run fits");
        assert!(!run.is_empty());
        assert_eq!(run.stride(), 3);
        assert_eq!(run.get(1), Some(&4));
        assert_eq!(run.get(2), None);
        assert!(RunMut::new(&mut pixels, 0, 1, 0).expect("empty run fits").is_empty());
    }

    #[test]
    fn copy_from_stops_at_shorter_run() {
        let source = [1u8, 2, 3, 4];
        let mut target = [0u8; 6];
        let src = Run::new(&source, 0, 1, 4).expect("source fits");
        let mut dst = RunMut::new(&mut target, 0, 2, 3).expect("target fits");
        dst.copy_from(&src);
        assert_eq!(target, [1, 0, 2, 0, 3, 0]);
    }

    #[test]
    fn locate_run_refuses_partial_runs() {
        // 4x3 canvas
        assert_eq!(locate_run(Axis::X, 0, 0, 4, 4, 3), Some((0, 1)));
        assert_eq!(locate_run(Axis::X, 1, 2, 3, 4, 3), Some((9, 1)));
        assert_eq!(locate_run(Axis::X, 1, 2, 4, 4, 3), None);
        assert_eq!(locate_run(Axis::Y, 3, 0, 3, 4, 3), Some((3, 4)));
        assert_eq!(locate_run(Axis::Y, 3, 1, 3, 4, 3), None);
        assert_eq!(locate_run(Axis::X, -1, 0, 1, 4, 3), None);
        assert_eq!(locate_run(Axis::Y, 0, 3, 0, 4, 3), None);
    }
}
