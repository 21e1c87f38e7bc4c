// src/main.rs

//! `pixelgfx-demo` renders a small scene into an in-memory framebuffer and
//! prints it as ASCII art.
//!
//! Usage: `pixelgfx-demo [config.json]`. Without a file the default scene is
//! drawn. Set `RUST_LOG=debug` to follow what the library does.

use anyhow::Context;
use log::info;
use std::path::PathBuf;

use pixelgfx::config::Config;
use pixelgfx::fonts::TOM_THUMB;
use pixelgfx::{Bitmap, Canvas, FrameBuffer, Primitives, Rgb888, TextLayout};

/// Main entry point for the `pixelgfx-demo` application.
fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting pixelgfx-demo...");

    // --- Configuration ---
    let config = match std::env::args_os().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            info!("Loading configuration from {}", path.display());
            Config::load(&path)?
        }
        None => {
            info!("No configuration file given, using defaults.");
            Config::default()
        }
    };

    let framebuffer = render_scene(&config).context("Failed to render the demo scene")?;

    if config.output.ascii {
        print!("{}", ascii_art(&framebuffer, Rgb888::BLACK));
    }

    info!("pixelgfx-demo finished.");
    Ok(())
}

/// Draws the configured scene: a frame, two circles and the text inside the
/// frame.
fn render_scene(config: &Config) -> anyhow::Result<Bitmap<Rgb888>> {
    let (width, height) = (config.canvas.width, config.canvas.height);
    let max_x = i16::try_from(width).context("Canvas width does not fit the coordinate range")?;
    let max_y = i16::try_from(height).context("Canvas height does not fit the coordinate range")?;

    let mut framebuffer: Bitmap<Rgb888> = Bitmap::new(width, height);
    info!("Framebuffer: {}x{}", width, height);

    let shapes = &config.shapes;
    if shapes.frame {
        framebuffer.draw_rectangle(0, 0, width, height, shapes.frame_color);
    }
    if shapes.circle_radius > 0 {
        let (cx, cy) = (max_x - max_x / 4, max_y / 2);
        framebuffer.fill_circle(cx, cy, shapes.circle_radius, shapes.circle_color);
        framebuffer.draw_circle(cx, cy, shapes.circle_radius.saturating_add(1), shapes.frame_color);
    }

    // Text lives inside the frame and cannot overwrite it.
    let inset = u16::from(shapes.frame);
    let mut text_area = Canvas::new(
        &mut framebuffer,
        inset as i16,
        inset as i16,
        width.saturating_sub(2 * inset),
        height.saturating_sub(2 * inset),
    );

    let text = &config.text;
    let mut layout = TextLayout::new(&TOM_THUMB, text.color);
    layout.set_cursor(text.cursor_x, text.cursor_y);
    layout.set_text_wrap(text.wrap);

    match layout.text_bounding_box(text_area.width(), &text.content) {
        Some((box_width, box_height)) => {
            info!("Text {:?} needs {}x{} pixels", text.content, box_width, box_height)
        }
        None => info!("Text {:?} has no font to measure it", text.content),
    }
    layout.draw_text(&mut text_area, &text.content);

    Ok(framebuffer)
}

/// Renders the framebuffer with `#` for every pixel that differs from
/// `background` and `.` for the rest, one line per row.
fn ascii_art(framebuffer: &dyn FrameBuffer<Rgb888>, background: Rgb888) -> String {
    let (width, height) = (framebuffer.width(), framebuffer.height());
    let mut out = String::with_capacity((usize::from(width) + 1) * usize::from(height));
    for y in 0..height as i16 {
        for x in 0..width as i16 {
            let inked = framebuffer.color(x, y).is_some_and(|&color| color != background);
            out.push(if inked { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}
