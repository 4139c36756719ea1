//! Scene files.
//!
//! Scenes are stored as JSON. Vectors are `[x, y, z]` arrays and
//! materials may be written inline or as a preset name:
//!
//! ```json
//! {
//!   "ambient": [0.1, 0.1, 0.1],
//!   "lights": [{ "position": [0, 10, 0], "color": [1, 1, 1] }],
//!   "spheres": [{ "center": [0, 0, -5], "radius": 1, "material": "glass" }]
//! }
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::{Scene, SceneError};

/// Errors that can occur while loading or saving a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

impl Scene {
    /// Parse and validate a scene from JSON text.
    pub fn from_json_str(json: &str) -> LoadResult<Scene> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;

        if scene.lights.is_empty() {
            log::warn!("Scene '{}' has no lights; only ambient shading will show", scene.name);
        }

        Ok(scene)
    }

    /// Serialize the scene as pretty-printed JSON.
    pub fn to_json_string(&self) -> LoadResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a scene file.
    ///
    /// An unnamed scene takes the file stem as its name.
    pub fn load<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let mut scene = Scene::from_json_str(&text)?;

        if scene.name.is_empty() {
            scene.name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unnamed")
                .to_string();
        }

        log::info!(
            "Loaded scene '{}' from {}: {} lights, {} primitives",
            scene.name,
            path.display(),
            scene.light_count(),
            scene.primitive_count()
        );

        Ok(scene)
    }

    /// Write the scene to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> LoadResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?)?;
        log::info!("Saved scene '{}' to {}", self.name, path.display());
        Ok(())
    }
}
