// src/fonts/mod.rs

//! Fonts compiled into the crate.

mod tom_thumb;

pub use tom_thumb::TOM_THUMB;
