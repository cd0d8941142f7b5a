//! Local illumination with hard shadows and recursive mirror reflection.

use glint_core::{Color, Scene};
use glint_math::{Interval, Ray};

use crate::hittable::{surface_normal, Hit, Hittable};

/// Trace `ray` into the scene and shade whatever it hits first.
///
/// Returns `None` on a miss so callers can keep their background.
pub fn trace(ray: &Ray, scene: &Scene, bounces: u32) -> Option<Color> {
    let hit = scene.hit(ray, Interval::HIT)?;
    Some(shade(ray, &hit, scene, bounces))
}

/// Compute the color leaving `hit` back along `ray`.
///
/// The result is ambient + diffuse + specular + reflection, unclamped:
///
/// - a point that sees *any* geometry on the way to the light is black,
///   including its ambient term;
/// - a point whose normal faces away from the eye/light half vector is black;
/// - diffuse falls off with the squared distance to the light;
/// - specular is `Ks * (N.H)^2` tinted by the surface's own color;
/// - while `bounces > 0` the mirror ray is traced and its shade, scaled by the
///   surface reflectivity, is added with one bounce fewer.
pub fn shade(ray: &Ray, hit: &Hit<'_>, scene: &Scene, bounces: u32) -> Color {
    let p = hit.point(ray);
    let light = scene.light();

    // Hard shadow: any hit at all blocks the light
    let shadow_ray = Ray::through(p, light.position);
    if scene.hit(&shadow_ray, Interval::HIT).is_some() {
        return Color::ZERO;
    }

    let n = surface_normal(hit.primitive, p);
    let to_point_from_light = p - light.position;
    let to_point_from_eye = p - ray.origin;
    let half = (to_point_from_eye + to_point_from_light).normalize_or_zero();

    let n_dot_h = n.dot(half);
    if n_dot_h < 0.0 {
        return Color::ZERO;
    }

    let material = hit.primitive.material();

    let ambient = material.base_color * material.ambient;
    let diffuse = light.color
        * (light.brightness / to_point_from_light.length_squared())
        * material.diffuse;
    let specular = material.base_color * (n_dot_h * n_dot_h) * material.specular;

    let mut reflection = Color::ZERO;
    if bounces > 0 {
        let to_eye = (ray.origin - p).normalize();
        let mirrored = 2.0 * to_eye.dot(n) * n - to_eye;
        let reflected_ray = Ray::normalized(p, mirrored);

        if let Some(color) = trace(&reflected_ray, scene, bounces - 1) {
            reflection = color * material.reflectivity;
        }
    }

    ambient + diffuse + specular + reflection
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Light, Material, Shape};
    use glint_math::Vec3;

    fn matte(color: Color, reflectivity: f32) -> Material {
        Material {
            base_color: color,
            reflectivity,
            ..Default::default()
        }
    }

    /// A lit sphere straight ahead with the light beside the camera.
    fn lit_sphere_scene() -> Scene {
        let light = Light {
            position: Vec3::new(0.0, 0.0, 5.0),
            color: Color::splat(255.0),
            brightness: 1.0,
        };
        let mut scene = Scene::new("lit", light);
        scene
            .add(
                Shape::sphere(Vec3::new(0.0, 0.0, 30.0), 10.0),
                matte(Color::new(255.0, 25.0, 25.0), 0.5),
            )
            .unwrap();
        scene
    }

    #[test]
    fn test_head_on_shading_terms() {
        let scene = lit_sphere_scene();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let color = trace(&ray, &scene, 0).unwrap();

        // P = (0,0,20), N = +Z, H = +Z, |L|^2 = 225
        let base = Color::new(255.0, 25.0, 25.0);
        let expected = base * 0.1 + Color::splat(255.0 / 225.0 * 0.8) + base * 0.8;
        assert!((color - expected).length() < 1e-2, "{color} != {expected}");
    }

    #[test]
    fn test_shadow_blacks_out_point() {
        let mut scene = lit_sphere_scene();
        scene.set_light(Light {
            position: Vec3::new(0.0, 0.0, -10.0),
            ..*scene.light()
        });
        // Blocker between the hit point (0,0,20) and the light, off the camera axis
        scene
            .add(
                Shape::sphere(Vec3::new(0.0, 0.0, 0.0), 1.0),
                Material::default(),
            )
            .unwrap();

        // Camera sits beside the blocker so its view of the sphere is clear
        let ray = Ray::through(Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 20.0));
        let hit = scene.hit(&ray, Interval::HIT).unwrap();
        assert_eq!(hit.primitive.index(), 0);

        let color = shade(&ray, &hit, &scene, 1);
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_occluder_behind_light_still_shadows() {
        let mut scene = lit_sphere_scene();
        // Light sits between the surface and the blocker
        scene.set_light(Light {
            position: Vec3::new(0.0, 0.0, 10.0),
            ..*scene.light()
        });
        scene
            .add(Shape::sphere(Vec3::new(0.0, 0.0, 2.0), 1.0), Material::default())
            .unwrap();

        let ray = Ray::through(Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 20.0));
        let color = trace(&ray, &scene, 0).unwrap();
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_back_face_guard() {
        // Light far behind the triangle relative to the camera
        let light = Light {
            position: Vec3::new(0.2, 0.2, 100.0),
            color: Color::splat(255.0),
            brightness: 1.0,
        };
        let mut scene = Scene::new("backface", light);
        scene
            .add(
                Shape::triangle(
                    Vec3::new(-1.0, -1.0, 5.0),
                    Vec3::new(1.0, -1.0, 5.0),
                    Vec3::new(-1.0, 1.0, 5.0),
                ),
                Material::default(),
            )
            .unwrap();

        // Normal is +Z like the eye vector, but the half vector points back at the camera
        let ray = Ray::through(Vec3::ZERO, Vec3::new(-0.2, -0.2, 5.0));
        assert_eq!(trace(&ray, &scene, 0), Some(Color::ZERO));
    }

    /// A grey reflective floor the camera looks down onto, mirroring a green sphere.
    fn facing_mirrors() -> Scene {
        let light = Light {
            position: Vec3::new(0.0, 0.0, 10.0),
            color: Color::splat(255.0),
            brightness: 1.0,
        };
        let mut scene = Scene::new("mirrors", light);
        scene
            .add(
                Shape::triangle(
                    Vec3::new(-50.0, 5.0, 0.0),
                    Vec3::new(0.0, 5.0, 100.0),
                    Vec3::new(50.0, 5.0, 0.0),
                ),
                matte(Color::splat(100.0), 1.0),
            )
            .unwrap();
        scene
            .add(
                Shape::sphere(Vec3::new(0.0, -5.0, 60.0), 10.0),
                matte(Color::new(0.0, 255.0, 0.0), 1.0),
            )
            .unwrap();
        scene
    }

    #[test]
    fn test_zero_bounces_has_no_reflection() {
        let scene = facing_mirrors();
        let ray = Ray::through(Vec3::ZERO, Vec3::new(0.0, 5.0, 20.0));
        let hit = scene.hit(&ray, Interval::HIT).unwrap();
        assert_eq!(hit.primitive.index(), 0);

        let without = shade(&ray, &hit, &scene, 0);
        let with = shade(&ray, &hit, &scene, 1);

        // Without bounces only the triangle's own terms are present (grey)
        assert_eq!(without.x, without.y);
        assert_eq!(without.y, without.z);

        // The reflected ray reaches the green sphere
        assert!(with.y > without.y + 10.0);
        assert!(with.y - without.y > with.x - without.x);
    }

    #[test]
    fn test_reflection_is_scaled_by_reflectivity() {
        let scene = facing_mirrors();
        let ray = Ray::through(Vec3::ZERO, Vec3::new(0.0, 5.0, 20.0));
        let hit = scene.hit(&ray, Interval::HIT).unwrap();
        let p = hit.point(&ray);

        let local = shade(&ray, &hit, &scene, 0);
        let full = shade(&ray, &hit, &scene, 1);

        let n = surface_normal(hit.primitive, p);
        let to_eye = (ray.origin - p).normalize();
        let reflected = Ray::normalized(p, 2.0 * to_eye.dot(n) * n - to_eye);
        let bounced = trace(&reflected, &scene, 0).unwrap();

        assert!((full - (local + bounced * 1.0)).length() < 1e-3);
    }

    #[test]
    fn test_shading_is_deterministic() {
        let scene = Scene::demo();
        let ray = Ray::through(Vec3::ZERO, Vec3::new(-6.0, -4.0, 20.0));
        assert_eq!(trace(&ray, &scene, 1), trace(&ray, &scene, 1));
    }
}
