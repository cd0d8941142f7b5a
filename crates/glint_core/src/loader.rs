//! Plain-text triangle list loading.
//!
//! Each line describes one triangle as nine floats (three vertices, x y z
//! each), separated by commas and/or whitespace:
//!
//! ```text
//! -5, 5, 30, 10, 5, 30, 5, 15, 30
//! -5 5 20   10 5 30   0 15 30
//! ```
//!
//! Blank lines and `#` comments are skipped. Loading stops at the first line
//! that does not hold nine numbers; everything before it is kept.

use std::path::Path;

use glint_math::Vec3;
use log::{info, warn};
use thiserror::Error;

use crate::scene::{Light, Material, Scene, Shape};

/// Errors that can occur while loading a triangle file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No geometry found in triangle file")]
    NoGeometry,
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a triangle file and return a scene lit by the default light.
pub fn load_triangles<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");

    let content = std::fs::read_to_string(path)?;
    let mut scene = load_triangles_from_str(&content)?;
    scene.name = name.to_string();

    info!(
        "Loaded {} triangles from {}",
        scene.triangle_count(),
        path.display()
    );
    Ok(scene)
}

/// Parse triangle text already in memory.
pub fn load_triangles_from_str(content: &str) -> LoadResult<Scene> {
    let mut scene = Scene::new("unnamed", Light::default());
    let material = Material::default();

    for (line_no, line) in content.lines().enumerate().map(|(i, l)| (i + 1, l.trim())) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some([p1, p2, p3]) = parse_triangle(line) else {
            warn!("Stopped loading at line {line_no}: expected nine numbers, got {line:?}");
            break;
        };

        if let Err(e) = scene.add(Shape::triangle(p1, p2, p3), material) {
            warn!("Skipping triangle on line {line_no}: {e}");
        }
    }

    if scene.is_empty() {
        return Err(LoadError::NoGeometry);
    }
    Ok(scene)
}

/// Parse exactly nine floats into three vertices.
fn parse_triangle(line: &str) -> Option<[Vec3; 3]> {
    let mut values = [0.0f32; 9];
    let mut fields = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());

    for value in values.iter_mut() {
        *value = fields.next()?.parse().ok()?;
    }
    if fields.next().is_some() {
        return None;
    }

    Some([
        Vec3::new(values[0], values[1], values[2]),
        Vec3::new(values[3], values[4], values[5]),
        Vec3::new(values[6], values[7], values[8]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        let scene = load_triangles_from_str(
            "# two triangles\n\
             -5, 5, 30, 10, 5, 30, 5, 15, 30\n\
             \n\
             -5 5 20   10 5 30   0 15 30\n",
        )
        .unwrap();

        assert_eq!(scene.triangle_count(), 2);
        assert_eq!(
            *scene.primitive(1).unwrap().shape(),
            Shape::triangle(
                Vec3::new(-5.0, 5.0, 20.0),
                Vec3::new(10.0, 5.0, 30.0),
                Vec3::new(0.0, 15.0, 30.0)
            )
        );
        assert_eq!(*scene.primitive(0).unwrap().material(), Material::default());
        assert_eq!(*scene.light(), Light::default());
    }

    #[test]
    fn test_stops_at_first_malformed_line() {
        let scene = load_triangles_from_str(
            "0 0 5 1 0 5 0 1 5\n\
             0 0 6 1 0 6 0 1\n\
             0 0 7 1 0 7 0 1 7\n",
        )
        .unwrap();

        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_rejects_extra_fields() {
        assert!(parse_triangle("0 0 5 1 0 5 0 1 5 9").is_none());
        assert!(parse_triangle("0 0 5 1 0 5 0 1 x").is_none());
        assert!(parse_triangle("0,0,5,1,0,5,0,1,5").is_some());
    }

    #[test]
    fn test_skips_degenerate_triangles() {
        let scene = load_triangles_from_str(
            "0 0 5 1 0 5 2 0 5\n\
             0 0 5 1 0 5 0 1 5\n",
        )
        .unwrap();

        assert_eq!(scene.len(), 1);
        assert_eq!(scene.primitive(0).unwrap().index(), 0);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        assert!(matches!(
            load_triangles_from_str("# nothing here\n"),
            Err(LoadError::NoGeometry)
        ));
        assert!(matches!(
            load_triangles_from_str("not a triangle\n0 0 5 1 0 5 0 1 5\n"),
            Err(LoadError::NoGeometry)
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_triangles("/definitely/not/here/triangles.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
