//! Glint Core - Scene model for the glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Primitive`, `Shape`, `Material`, `Light`
//! - **Triangle loading**: plain-text triangle lists (nine floats per line)
//! - **Edits**: the discrete nudges applied between render passes
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{load_triangles, Edit, Axis};
//!
//! let mut scene = load_triangles("teapot.txt")?;
//! let mut eye = glint_math::Vec3::ZERO;
//! Edit::MovePrimitive { index: 0, axis: Axis::X, step: 1.0 }.apply(&mut scene, &mut eye)?;
//! ```

pub mod edit;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use edit::{Axis, Edit};
pub use loader::{load_triangles, load_triangles_from_str, LoadError, LoadResult};
pub use scene::{Color, Light, Material, Primitive, Scene, SceneError, Shape};
