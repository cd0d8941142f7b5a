//! Ray-sphere intersection.

use glint_math::{Interval, Ray, Vec3};

/// Geometric ray-sphere test.
///
/// Projects the center onto the ray (`tca`), measures the squared
/// perpendicular distance to it, and steps back/forward by the half chord
/// (`thc`). The near root is tried first; the far root covers rays that
/// start inside the sphere or just past its near side.
pub fn intersect(center: Vec3, radius: f32, ray: &Ray, ray_t: Interval) -> Option<f32> {
    let l = center - ray.origin;
    let tca = l.dot(ray.direction);
    let d2 = (l.length_squared() - tca * tca).max(0.0);
    let r2 = radius * radius;

    if d2 >= r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();

    let near = tca - thc;
    if ray_t.surrounds(near) {
        return Some(near);
    }

    let far = tca + thc;
    ray_t.surrounds(far).then_some(far)
}

/// Sphere normal at `p`, pointing from the surface towards the center.
///
/// This faces the same way as the eye-to-point and light-to-point vectors
/// the shader compares it against.
#[inline]
pub fn normal(center: Vec3, p: Vec3) -> Vec3 {
    (center - p).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::HIT_EPSILON;

    #[test]
    fn test_sphere_hit_near_root() {
        let center = Vec3::new(0.0, 0.0, 30.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let t = intersect(center, 10.0, &ray, Interval::HIT).unwrap();
        assert!((t - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_hit_off_axis() {
        let center = Vec3::new(2.0, 3.0, 40.0);
        let ray = Ray::through(Vec3::new(1.0, -1.0, 0.0), center);

        let t = intersect(center, 5.0, &ray, Interval::HIT).unwrap();
        let expected = (center - ray.origin).length() - 5.0;
        assert!((t - expected).abs() < 1e-3);
    }

    #[test]
    fn test_sphere_miss() {
        let center = Vec3::new(0.0, 0.0, 30.0);

        // Ray pointing away from sphere
        let away = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert!(intersect(center, 10.0, &away, Interval::HIT).is_none());

        // Ray passing beside it
        let beside = Ray::new(Vec3::new(11.0, 0.0, 0.0), Vec3::Z);
        assert!(intersect(center, 10.0, &beside, Interval::HIT).is_none());
    }

    #[test]
    fn test_inside_sphere_hits_far_side() {
        let center = Vec3::new(0.0, 0.0, 0.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let t = intersect(center, 3.0, &ray, Interval::HIT).unwrap();
        assert!((t - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_no_self_hit_leaving_surface() {
        let center = Vec3::new(1.0, 2.0, 30.0);
        let radius = 10.0;
        let outward = Vec3::new(0.3, -0.4, -1.0).normalize();
        let on_surface = center + outward * radius;

        let ray = Ray::new(on_surface, outward);
        assert!(intersect(center, radius, &ray, Interval::HIT).is_none());

        // Nudged just inside the epsilon band, still no hit
        let ray = Ray::new(on_surface - outward * (HIT_EPSILON * 0.5), outward);
        assert!(intersect(center, radius, &ray, Interval::HIT).is_none());
    }

    #[test]
    fn test_grazing_ray_misses() {
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::Z);
        assert!(intersect(Vec3::new(0.0, 0.0, 30.0), 10.0, &ray, Interval::HIT).is_none());
    }

    #[test]
    fn test_normal_points_to_center() {
        let n = normal(Vec3::new(0.0, 0.0, 30.0), Vec3::new(0.0, 0.0, 20.0));
        assert!((n - Vec3::Z).length() < 1e-6);
    }
}
