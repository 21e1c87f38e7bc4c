// src/config.rs

//! Defines the configuration structures for the `pixelgfx-demo` binary.
//!
//! The configuration is read from a JSON file. Every field has a default, so
//! a file only needs to name the settings it changes, and running without a
//! file renders the built-in scene.

use anyhow::{ensure, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::color::Rgb888;

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration of the demo scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Size of the framebuffer.
    pub canvas: CanvasConfig,
    /// Text drawn into the scene.
    pub text: TextConfig,
    /// Shapes drawn behind the text.
    pub shapes: ShapesConfig,
    /// How the result is printed.
    pub output: OutputConfig,
}

impl Config {
    /// Reads and validates a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!("Config: loaded {:?}", config);
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.canvas.width > 0 && self.canvas.height > 0,
            "canvas must not be empty, got {}x{}",
            self.canvas.width,
            self.canvas.height
        );
        Ok(())
    }
}

// --- Canvas Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            width: 32,
            height: 8,
        }
    }
}

// --- Text Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Text to draw. `\n` starts a new line.
    pub content: String,
    /// Start of the baseline of the first character.
    pub cursor_x: i16,
    pub cursor_y: i16,
    /// Continue on the next line instead of clipping at the right edge.
    pub wrap: bool,
    pub color: Rgb888,
}

impl Default for TextConfig {
    fn default() -> Self {
        TextConfig {
            content: "Hello!".to_string(),
            cursor_x: 1,
            cursor_y: 6,
            wrap: true,
            color: Rgb888::WHITE,
        }
    }
}

// --- Shapes Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapesConfig {
    /// Draw a rectangle along the canvas border.
    pub frame: bool,
    /// Radius of the circles in the right half of the canvas. 0 disables them.
    pub circle_radius: u16,
    pub frame_color: Rgb888,
    pub circle_color: Rgb888,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        ShapesConfig {
            frame: true,
            circle_radius: 2,
            frame_color: Rgb888::BLUE,
            circle_color: Rgb888::YELLOW,
        }
    }
}

// --- Output Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the framebuffer as ASCII art to stdout.
    pub ascii: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig { ascii: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn empty_object_yields_defaults() {
        let config = Config::from_json("{}").expect("empty config is valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = Config::from_json(
            r#"{ "canvas": { "width": 64 }, "text": { "content": "Hi", "color": { "r": 255, "g": 0, "b": 0 } } }"#,
        )
        .expect("partial config is valid");
        assert_eq!(config.canvas.width, 64);
        assert_eq!(config.canvas.height, CanvasConfig::default().height);
        assert_eq!(config.text.content, "Hi");
        assert_eq!(config.text.color, Rgb888::RED);
        assert!(config.text.wrap);
        assert_eq!(config.shapes, ShapesConfig::default());
    }

    #[test]
    fn empty_canvas_is_rejected() {
        let err = Config::from_json(r#"{ "canvas": { "height": 0 } }"#).expect_err("0 height");
        assert!(format!("{err:#}").contains("canvas must not be empty"));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = Config::from_json("{ canvas").expect_err("not JSON");
        assert!(err.to_string().contains("Failed to parse config JSON"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Config::load(Path::new("/nonexistent/pixelgfx.json")).expect_err("no such file");
        assert!(err.to_string().contains("/nonexistent/pixelgfx.json"));
    }
}
