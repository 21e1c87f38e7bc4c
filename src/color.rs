// src/color.rs

//! Defines the `Color` capability required by every drawing operation, plus
//! the `Rgb888` value type used by the demo binary and its configuration.
//!
//! The graphics core never looks inside a color. It only copies values into a
//! framebuffer and compares them, so any small `Copy` type qualifies: a raw
//! `u16` in RGB565 layout, a `u32`, or a struct such as [`Rgb888`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pixel value the core can store in a framebuffer.
///
/// `Default` is the value a freshly allocated bitmap is filled with.
pub trait Color: Copy + PartialEq + Default + fmt::Debug {}

impl<T> Color for T where T: Copy + PartialEq + Default + fmt::Debug {}

/// A 24-bit true color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb888 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb888 {
    pub const BLACK: Rgb888 = Rgb888::new(0, 0, 0);
    pub const WHITE: Rgb888 = Rgb888::new(255, 255, 255);
    pub const RED: Rgb888 = Rgb888::new(255, 0, 0);
    pub const GREEN: Rgb888 = Rgb888::new(0, 255, 0);
    pub const BLUE: Rgb888 = Rgb888::new(0, 0, 255);
    pub const YELLOW: Rgb888 = Rgb888::new(255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` value. The upper byte is ignored.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Packs the color back into `0xRRGGBB`.
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

impl fmt::Display for Rgb888 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.to_hex())
    }
}
