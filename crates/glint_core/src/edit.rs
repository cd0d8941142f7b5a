//! Discrete scene and camera edits.
//!
//! Edits arrive between render passes (from key presses in the viewer) and
//! are applied atomically: an edit either fully applies or leaves everything
//! untouched.

use glint_math::Vec3;

use crate::scene::{Scene, SceneError, Shape};

/// World axis an edit moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// A single edit command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    /// Translate a primitive (every vertex, or the sphere center).
    MovePrimitive { index: usize, axis: Axis, step: f32 },
    /// Grow (positive delta) or shrink a sphere's radius.
    ResizeSphere { index: usize, delta: f32 },
    /// Translate the eye point.
    MoveCamera { axis: Axis, step: f32 },
}

impl Edit {
    /// Apply the edit to the scene or the eye point.
    pub fn apply(&self, scene: &mut Scene, eye: &mut Vec3) -> Result<(), SceneError> {
        match *self {
            Edit::MovePrimitive { index, axis, step } => {
                let shape = current_shape(scene, index)?;
                scene.replace_shape(index, shape.translated(axis.unit() * step))
            }
            Edit::ResizeSphere { index, delta } => match current_shape(scene, index)? {
                Shape::Sphere { center, radius } => {
                    scene.replace_shape(index, Shape::sphere(center, radius + delta))
                }
                Shape::Triangle { .. } => Err(SceneError::NotASphere(index)),
            },
            Edit::MoveCamera { axis, step } => {
                let moved = *eye + axis.unit() * step;
                if !moved.is_finite() {
                    return Err(SceneError::NonFinite);
                }
                *eye = moved;
                Ok(())
            }
        }
    }

    /// Whether the edit changes the scene (as opposed to only the camera).
    pub fn touches_scene(&self) -> bool {
        !matches!(self, Edit::MoveCamera { .. })
    }
}

fn current_shape(scene: &Scene, index: usize) -> Result<Shape, SceneError> {
    scene
        .primitive(index)
        .map(|p| *p.shape())
        .ok_or(SceneError::UnknownPrimitive(index))
}
