//! Ray-triangle intersection.
//!
//! Uses the Möller-Trumbore algorithm, which solves for the barycentric
//! coordinates with determinants and so has no preferred axis.

use glint_math::{Interval, Ray, Vec3};

/// Rays this close to parallel with the triangle's plane are treated as misses.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Möller-Trumbore ray-triangle intersection.
///
/// A point is inside when `u > 0`, `v > 0` and `u + v <= 1`, so hits exactly
/// on the p1-p2 and p1-p3 edges are rejected while the p2-p3 edge is kept.
pub fn intersect(p1: Vec3, p2: Vec3, p3: Vec3, ray: &Ray, ray_t: Interval) -> Option<f32> {
    let edge1 = p2 - p1;
    let edge2 = p3 - p1;

    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < PARALLEL_EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - p1;
    let u = f * s.dot(h);
    if u <= 0.0 || u > 1.0 {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);
    if v <= 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    ray_t.surrounds(t).then_some(t)
}

/// Face normal, constant over the triangle and fixed by winding p1 -> p2 -> p3.
#[inline]
pub fn normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    (p2 - p1).cross(p3 - p1).normalize()
}
