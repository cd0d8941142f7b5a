//! Glint Renderer - CPU ray tracing core.
//!
//! A brute-force Whitted-style tracer: one primary ray per pixel, a linear
//! nearest-hit scan over the scene, ambient/diffuse/specular shading with
//! hard shadows, and a bounded number of mirror reflection bounces.
//! Frames are rendered in parallel tiles with rayon.

mod bucket;
mod camera;
mod hittable;
mod renderer;
mod shading;
mod sphere;
mod triangle;

pub use bucket::{
    generate_buckets, render_bucket, render_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};
pub use camera::{Camera, DEFAULT_FOCAL_LENGTH};
pub use hittable::{surface_normal, Hit, Hittable};
pub use renderer::{
    color_to_rgba, mean_color, pick, render, render_pixel, render_to_sink, ImageBuffer, PixelSink,
    RenderConfig,
};
pub use shading::{shade, trace};

/// Re-export scene and math types used in the public API
pub use glint_core::{Color, Light, Material, Primitive, Scene, Shape};
pub use glint_math::{Interval, Ray, Vec3, HIT_EPSILON};
