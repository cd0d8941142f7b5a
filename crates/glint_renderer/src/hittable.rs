//! Hittable trait and Hit record for ray-object intersection.

use glint_core::{Primitive, Scene, Shape};
use glint_math::{Interval, Ray, Vec3};

use crate::{sphere, triangle};

/// Record of a ray-primitive intersection.
///
/// Borrows the primitive from its scene, so a hit cannot outlive an edit.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Distance along the (unit) ray direction
    pub t: f32,
    /// The primitive that was struck
    pub primitive: &'a Primitive,
}

impl<'a> Hit<'a> {
    /// World-space point where `ray` meets the primitive.
    #[inline]
    pub fn point(&self, ray: &Ray) -> Vec3 {
        ray.at(self.t)
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Return the nearest hit with `t` strictly inside `ray_t`, if any.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<Hit<'a>>;
}

impl Hittable for Primitive {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<Hit<'a>> {
        let t = match *self.shape() {
            Shape::Sphere { center, radius } => sphere::intersect(center, radius, ray, ray_t),
            Shape::Triangle { p1, p2, p3 } => triangle::intersect(p1, p2, p3, ray, ray_t),
        }?;
        Some(Hit { t, primitive: self })
    }
}

/// Nearest-hit query: a linear scan over every primitive.
impl Hittable for Scene {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<Hit<'a>> {
        let mut closest: Option<Hit<'a>> = None;

        for primitive in self.primitives() {
            let interval = closest.map_or(ray_t, |c| ray_t.with_max(c.t));
            if let Some(hit) = primitive.hit(ray, interval) {
                closest = Some(hit);
            }
        }

        closest
    }
}

/// Surface normal of `primitive` at point `p`.
pub fn surface_normal(primitive: &Primitive, p: Vec3) -> Vec3 {
    match *primitive.shape() {
        Shape::Sphere { center, .. } => sphere::normal(center, p),
        Shape::Triangle { p1, p2, p3 } => triangle::normal(p1, p2, p3),
    }
}
