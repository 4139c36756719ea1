//! Phong-style surface materials.
//!
//! Reflectiveness and refractiveness are plain weights for the two
//! transport chains, not physical quantities. In particular
//! `refractiveness` is also used as the refraction ratio when bending a
//! ray through the surface.

use prism_math::Vec3;
use serde::{Deserialize, Serialize};

/// A surface material, copied by value into every hit record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "MaterialDef")]
pub struct Material {
    /// Diffuse color (RGB, may exceed 1)
    pub diffuse: Vec3,

    /// Specular color (RGB, may exceed 1)
    pub specular: Vec3,

    /// Phong exponent, > 0
    pub glossiness: f32,

    /// Refraction weight and ratio, in [0, 1]
    pub refractiveness: f32,

    /// Reflection weight, in [0, 1]
    pub reflectiveness: f32,
}

impl Material {
    /// The all-zero material carried by "no hit".
    pub const ZERO: Material = Material {
        diffuse: Vec3::ZERO,
        specular: Vec3::ZERO,
        glossiness: 0.0,
        refractiveness: 0.0,
        reflectiveness: 0.0,
    };

    /// Create a material from all five parameters.
    pub const fn new(
        diffuse: Vec3,
        specular: Vec3,
        glossiness: f32,
        refractiveness: f32,
        reflectiveness: f32,
    ) -> Self {
        Self {
            diffuse,
            specular,
            glossiness,
            refractiveness,
            reflectiveness,
        }
    }

    /// Opaque, non-reflective material.
    pub const fn matte(diffuse: Vec3, specular: Vec3, glossiness: f32) -> Self {
        Self::new(diffuse, specular, glossiness, 0.0, 0.0)
    }

    pub fn with_reflectiveness(mut self, reflectiveness: f32) -> Self {
        self.reflectiveness = reflectiveness;
        self
    }

    pub fn with_refractiveness(mut self, refractiveness: f32) -> Self {
        self.refractiveness = refractiveness;
        self
    }

    pub const fn default_grey() -> Self {
        Self::new(Vec3::splat(0.3), Vec3::ZERO, 1.0, 1.0, 1.0)
    }

    /// Bright, rough, opaque.
    pub const fn paper() -> Self {
        Self::new(Vec3::splat(2.0), Vec3::ZERO, 0.2, 0.0, 0.0)
    }

    /// Yellow plastic with a soft highlight and a faint reflection.
    pub const fn plastic() -> Self {
        Self::new(Vec3::new(1.0, 1.0, 0.15), Vec3::splat(0.5), 2.0, 0.0, 0.2)
    }

    /// Clear glass: no diffuse, strong highlight, reflects and refracts.
    pub const fn glass() -> Self {
        Self::new(Vec3::ZERO, Vec3::splat(3.0), 50.0, 0.85, 1.0)
    }

    /// Polished steel acting as a mirror.
    pub const fn steel_mirror() -> Self {
        Self::new(Vec3::ZERO, Vec3::splat(0.4), 5.0, 0.0, 1.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::default_grey()
    }
}

/// Named materials usable in scene files as `"material": "glass"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialPreset {
    Default,
    Paper,
    Plastic,
    Glass,
    SteelMirror,
}

impl MaterialPreset {
    pub fn material(self) -> Material {
        match self {
            MaterialPreset::Default => Material::default_grey(),
            MaterialPreset::Paper => Material::paper(),
            MaterialPreset::Plastic => Material::plastic(),
            MaterialPreset::Glass => Material::glass(),
            MaterialPreset::SteelMirror => Material::steel_mirror(),
        }
    }
}

impl From<MaterialPreset> for Material {
    fn from(preset: MaterialPreset) -> Self {
        preset.material()
    }
}

/// On-disk form of a material: a preset name or the full parameter set.
#[derive(Deserialize)]
#[serde(untagged)]
enum MaterialDef {
    Preset(MaterialPreset),
    Inline {
        diffuse: Vec3,
        specular: Vec3,
        glossiness: f32,
        #[serde(default)]
        refractiveness: f32,
        #[serde(default)]
        reflectiveness: f32,
    },
}

impl From<MaterialDef> for Material {
    fn from(def: MaterialDef) -> Self {
        match def {
            MaterialDef::Preset(preset) => preset.material(),
            MaterialDef::Inline {
                diffuse,
                specular,
                glossiness,
                refractiveness,
                reflectiveness,
            } => Material::new(diffuse, specular, glossiness, refractiveness, reflectiveness),
        }
    }
}
