//! Scene types for glint.
//!
//! A scene is an ordered list of primitives plus a single point light.
//! Primitives are validated when they are added, so everything the tracer
//! sees is well formed.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color type alias (RGB in display units, 0-255 before clamping)
pub type Color = Vec3;

/// Smallest squared cross-product length for a triangle to count as non-degenerate.
const DEGENERATE_AREA_SQ: f32 = 1e-12;

/// Errors raised when a primitive or edit would leave the scene invalid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("triangle vertices are collinear")]
    DegenerateTriangle,

    #[error("primitive has non-finite coordinates")]
    NonFinite,

    #[error("no primitive with index {0}")]
    UnknownPrimitive(usize),

    #[error("primitive {0} is not a sphere")]
    NotASphere(usize),
}

/// Local-illumination parameters of a surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Surface color, also used for the specular highlight
    pub base_color: Color,

    /// Ambient coefficient (Ka)
    pub ambient: f32,

    /// Diffuse coefficient (Kd)
    pub diffuse: f32,

    /// Specular coefficient (Ks)
    pub specular: f32,

    /// Fraction of the reflected ray's color that is added back
    pub reflectivity: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: Color::splat(155.0),
            ambient: 0.1,
            diffuse: 0.8,
            specular: 0.8,
            reflectivity: 0.5,
        }
    }
}

impl Material {
    /// Create a material with the default coefficients and the given color.
    pub fn new(base_color: Color) -> Self {
        Self {
            base_color,
            ..Default::default()
        }
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
    pub brightness: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(-5.0, 0.0, 10.0),
            color: Color::splat(255.0),
            brightness: 1.0,
        }
    }
}

/// Geometry of a primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },
    /// Winding order p1 -> p2 -> p3 fixes the side the normal faces.
    Triangle { p1: Vec3, p2: Vec3, p3: Vec3 },
}

impl Shape {
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Shape::Sphere { center, radius }
    }

    pub fn triangle(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Shape::Triangle { p1, p2, p3 }
    }

    /// Check that the shape can be intersected without producing garbage.
    pub fn validate(&self) -> Result<(), SceneError> {
        match *self {
            Shape::Sphere { center, radius } => {
                if !center.is_finite() || !radius.is_finite() {
                    return Err(SceneError::NonFinite);
                }
                if radius <= 0.0 {
                    return Err(SceneError::InvalidRadius(radius));
                }
            }
            Shape::Triangle { p1, p2, p3 } => {
                if !(p1.is_finite() && p2.is_finite() && p3.is_finite()) {
                    return Err(SceneError::NonFinite);
                }
                if (p2 - p1).cross(p3 - p1).length_squared() < DEGENERATE_AREA_SQ {
                    return Err(SceneError::DegenerateTriangle);
                }
            }
        }
        Ok(())
    }

    /// Return the shape moved by `offset`.
    pub fn translated(&self, offset: Vec3) -> Shape {
        match *self {
            Shape::Sphere { center, radius } => Shape::Sphere {
                center: center + offset,
                radius,
            },
            Shape::Triangle { p1, p2, p3 } => Shape::Triangle {
                p1: p1 + offset,
                p2: p2 + offset,
                p3: p3 + offset,
            },
        }
    }

    pub fn is_sphere(&self) -> bool {
        matches!(self, Shape::Sphere { .. })
    }
}

/// A shape with a material and a stable identity index.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    index: usize,
    shape: Shape,
    material: Material,
}

impl Primitive {
    /// Identity index, assigned when the primitive was added to its scene.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }
}

/// A complete scene: primitives in insertion order plus one light.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    light: Light,

    /// Scene name (usually from filename)
    pub name: String,
}

impl Scene {
    /// Create an empty scene lit by `light`.
    pub fn new(name: impl Into<String>, light: Light) -> Self {
        Self {
            primitives: Vec::new(),
            light,
            name: name.into(),
        }
    }

    /// Validate and add a primitive, returning its identity index.
    pub fn add(&mut self, shape: Shape, material: Material) -> Result<usize, SceneError> {
        shape.validate()?;
        let index = self.primitives.len();
        self.primitives.push(Primitive {
            index,
            shape,
            material,
        });
        Ok(index)
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Look up a primitive by identity index.
    pub fn primitive(&self, index: usize) -> Option<&Primitive> {
        self.primitives.get(index)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn set_light(&mut self, light: Light) {
        self.light = light;
    }

    pub fn sphere_count(&self) -> usize {
        self.primitives.iter().filter(|p| p.shape.is_sphere()).count()
    }

    pub fn triangle_count(&self) -> usize {
        self.len() - self.sphere_count()
    }

    /// Replace a primitive's shape, keeping its index and material.
    ///
    /// The new shape is validated first; on error the scene is unchanged.
    pub fn replace_shape(&mut self, index: usize, shape: Shape) -> Result<(), SceneError> {
        let primitive = self
            .primitives
            .get_mut(index)
            .ok_or(SceneError::UnknownPrimitive(index))?;
        shape.validate()?;
        primitive.shape = shape;
        Ok(())
    }

    /// The scene the viewer opens with when no triangle file is given:
    /// three colored spheres and two grey triangles in front of the camera.
    pub fn demo() -> Self {
        let mut scene = Scene::new("demo", Light::default());
        let shapes = [
            (
                Shape::sphere(Vec3::new(-6.0, -4.0, 30.0), 10.0),
                Color::new(255.0, 25.0, 25.0),
            ),
            (
                Shape::sphere(Vec3::new(12.0, 10.0, 25.0), 5.0),
                Color::new(25.0, 255.0, 25.0),
            ),
            (
                Shape::sphere(Vec3::new(10.0, -10.0, 30.0), 8.0),
                Color::new(25.0, 25.0, 255.0),
            ),
            (
                Shape::triangle(
                    Vec3::new(-5.0, 5.0, 30.0),
                    Vec3::new(10.0, 5.0, 30.0),
                    Vec3::new(5.0, 15.0, 30.0),
                ),
                Color::splat(155.0),
            ),
            (
                Shape::triangle(
                    Vec3::new(-5.0, 5.0, 20.0),
                    Vec3::new(10.0, 5.0, 30.0),
                    Vec3::new(0.0, 15.0, 30.0),
                ),
                Color::splat(155.0),
            ),
        ];

        for (shape, color) in shapes {
            // Hard-coded shapes are all valid
            let _ = scene.add(shape, Material::new(color));
        }
        scene
    }
}
