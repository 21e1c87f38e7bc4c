// src/lib.rs

//! `pixelgfx` is a small 2D rasterization library for pixel displays.
//!
//! Drawing goes through the [`FrameBuffer`] capability, so the same code
//! renders into an in-memory [`Bitmap`], a fixed-size [`StaticBitmap`], a
//! clipping [`Canvas`] window or a device framebuffer. The [`Primitives`]
//! extension trait adds lines, rectangles, circles, fills and blits to every
//! framebuffer, and [`TextLayout`] renders text with Adafruit GFX compatible
//! bitmap fonts.

pub mod bitmap;
pub mod canvas;
pub mod color;
pub mod config;
pub mod font;
pub mod fonts;
pub mod glyph;
pub mod renderer;
pub mod surface;
pub mod text;

pub use bitmap::{Bitmap, StaticBitmap};
pub use canvas::Canvas;
pub use color::{Color, Rgb888};
pub use font::{Cursor, GlyphFont};
pub use glyph::{Font, Glyph};
pub use renderer::{adapt_coord_and_length, Primitives};
pub use surface::{FrameBuffer, Run, RunMut};
pub use text::TextLayout;
