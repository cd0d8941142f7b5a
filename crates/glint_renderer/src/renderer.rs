//! Frame production.
//!
//! Implements the per-pixel pipeline:
//! - one primary ray per pixel (no anti-aliasing)
//! - nearest-hit query, then shading with a bounded reflection depth
//! - misses keep the background color
//!
//! Also provides picking and conversion to displayable 8-bit colors.

use std::path::Path;
use std::time::Instant;

use glint_core::{Color, Scene};
use glint_math::{Interval, Vec3};
use log::info;
use serde::{Deserialize, Serialize};

use crate::bucket::{render_buckets, DEFAULT_BUCKET_SIZE};
use crate::{shading, Camera, Hittable};

/// Displayable range of a color channel.
const DISPLAY_RANGE: Interval = Interval {
    min: 0.0,
    max: 255.0,
};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Reflection bounces allowed from the primary hit
    pub max_bounces: u32,
    /// Color of pixels whose ray hits nothing
    pub background: Color,
    /// Edge length of the square tiles handed to worker threads
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_bounces: 1,
            background: Color::ZERO,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Receiver of rendered pixels, e.g. a window or an image.
///
/// Only pixels whose ray hit something are written.
pub trait PixelSink {
    fn put_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Trace a single pixel. Returns `None` if its ray hits nothing.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Option<Color> {
    let ray = camera.get_ray(x, y);
    shading::trace(&ray, scene, config.max_bounces)
}

/// Identity index of the primitive visible at screen position (x, y).
pub fn pick(camera: &Camera, scene: &Scene, x: u32, y: u32) -> Option<usize> {
    if !camera.contains_pixel(x, y) {
        return None;
    }
    let ray = camera.get_ray(x, y);
    scene
        .hit(&ray, Interval::HIT)
        .map(|hit| hit.primitive.index())
}

/// Clamp a color to 0-255 and convert it to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = DISPLAY_RANGE.clamp(color.x) as u8;
    let g = DISPLAY_RANGE.clamp(color.y) as u8;
    let b = DISPLAY_RANGE.clamp(color.z) as u8;
    [r, g, b, 255]
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Write the image as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
    }
}

impl PixelSink for ImageBuffer {
    fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.set(x, y, color);
    }
}

/// Render the frame in parallel and stream every hit pixel into `sink`.
///
/// The scene is only borrowed, so it cannot be edited while a frame is in flight.
pub fn render_to_sink<S: PixelSink + ?Sized>(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    sink: &mut S,
) {
    let start = Instant::now();
    info!(
        "Rendering {}x{} ({} primitives, {} bounce(s))",
        camera.image_width,
        camera.image_height,
        scene.len(),
        config.max_bounces
    );

    let mut written = 0usize;
    for result in render_buckets(camera, scene, config) {
        for (x, y, color) in result.hits() {
            sink.put_pixel(x, y, color);
            written += 1;
        }
    }

    info!(
        "Rendered in {:?} ({} of {} pixels hit)",
        start.elapsed(),
        written,
        camera.image_width as usize * camera.image_height as usize
    );
}

/// Render the entire scene to an image buffer.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height, config.background);
    render_to_sink(camera, scene, config, &mut image);
    image
}

/// Average color of an image, handy for quick sanity checks in logs.
pub fn mean_color(image: &ImageBuffer) -> Color {
    if image.pixels.is_empty() {
        return Color::ZERO;
    }
    image.pixels.iter().copied().sum::<Vec3>() / image.pixels.len() as f32
}
