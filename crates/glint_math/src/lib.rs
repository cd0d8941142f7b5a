// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Minimum accepted hit distance along a ray.
///
/// Anything closer is treated as the ray re-hitting the surface it starts on.
pub const HIT_EPSILON: f32 = 0.001;
