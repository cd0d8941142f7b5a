//! Pinhole camera for primary ray generation.
//!
//! The camera looks down +Z with +Y pointing down the screen. Pixel (x, y)
//! is projected through the image-plane point
//! `(x - width/2, y - height/2, focal_length)` relative to the eye.

use glint_math::{Ray, Vec3};

/// Default distance from the eye to the image plane, in pixels.
pub const DEFAULT_FOCAL_LENGTH: f32 = 500.0;

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    /// Eye point
    pub position: Vec3,
    pub focal_length: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 700,
            image_height: 700,
            position: Vec3::ZERO,
            focal_length: DEFAULT_FOCAL_LENGTH,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the eye point.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_focal_length(mut self, focal_length: f32) -> Self {
        self.focal_length = focal_length;
        self
    }

    /// Generate the ray for pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let direction = Vec3::new(
            x as f32 - (self.image_width / 2) as f32,
            y as f32 - (self.image_height / 2) as f32,
            self.focal_length,
        );
        Ray::normalized(self.position, direction)
    }

    /// Whether (x, y) lies on the raster.
    pub fn contains_pixel(&self, x: u32, y: u32) -> bool {
        x < self.image_width && y < self.image_height
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
