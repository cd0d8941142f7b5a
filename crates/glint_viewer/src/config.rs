//! Viewer configuration, loaded from an optional JSON file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glint_core::Light;
use glint_math::Vec3;
use glint_renderer::{Camera, RenderConfig, DEFAULT_FOCAL_LENGTH};
use serde::{Deserialize, Serialize};

/// Everything the viewer needs besides the scene itself.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub focal_length: f32,
    /// Initial eye point
    pub camera_position: Vec3,
    /// Replaces the scene's light when set
    pub light: Option<Light>,
    pub render: RenderConfig,
    /// Where every rendered frame is written
    pub output: PathBuf,
    /// Where the `p` command writes its copy
    pub screenshot_path: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 700,
            height: 700,
            focal_length: DEFAULT_FOCAL_LENGTH,
            camera_position: Vec3::ZERO,
            light: None,
            render: RenderConfig::default(),
            output: PathBuf::from("render.png"),
            screenshot_path: PathBuf::from("screenshot.png"),
        }
    }
}

impl ViewerConfig {
    /// Read a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Camera described by this config.
    pub fn camera(&self) -> Camera {
        Camera::new()
            .with_resolution(self.width, self.height)
            .with_position(self.camera_position)
            .with_focal_length(self.focal_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config = ViewerConfig::from_json(
            r#"{
                "width": 320,
                "camera_position": [0.0, 0.0, -5.0],
                "render": { "max_bounces": 2 },
                "light": { "position": [0.0, -20.0, 0.0] }
            }"#,
        )
        .unwrap();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, 700);
        assert_eq!(config.render.max_bounces, 2);
        assert_eq!(config.render.bucket_size, RenderConfig::default().bucket_size);

        let light = config.light.unwrap();
        assert_eq!(light.position, Vec3::new(0.0, -20.0, 0.0));
        assert_eq!(light.brightness, 1.0);

        let camera = config.camera();
        assert_eq!(camera.image_width, 320);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(camera.focal_length, DEFAULT_FOCAL_LENGTH);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(ViewerConfig::from_json("{ width: }").is_err());
        assert!(ViewerConfig::load("/no/such/glint.json").is_err());
    }
}
