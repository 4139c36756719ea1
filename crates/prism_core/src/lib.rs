//! Prism Core - scene description for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `PointLight`, `Sphere`, `Plane`, `Cylinder`
//! - **Materials**: `Material` and its named presets
//! - **Scene files**: JSON loading, validation and saving
//!
//! # Example
//!
//! ```ignore
//! use prism_core::Scene;
//!
//! let scene = Scene::load("scene.json")?;
//! println!("Loaded {} lights, {} primitives",
//!     scene.light_count(),
//!     scene.primitive_count());
//! ```

pub mod loader;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use loader::{LoadError, LoadResult};
pub use material::{Material, MaterialPreset};
pub use scene::{Cylinder, Plane, PointLight, Scene, SceneError, SceneResult, Sphere};
