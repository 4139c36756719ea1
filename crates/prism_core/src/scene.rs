//! Scene description types for Prism.
//!
//! A scene is plain data: an ambient term, point lights and three lists of
//! primitives. It is built once, validated, and then shared read-only by
//! every render worker.

use prism_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::material::Material;

/// Tolerance used when checking that normals and axes are unit length.
pub const UNIT_LENGTH_TOLERANCE: f32 = 1e-3;

/// Errors found while validating a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("{what} {index}: {field} must be unit length (got length {length})")]
    NonUnitVector {
        what: &'static str,
        index: usize,
        field: &'static str,
        length: f32,
    },

    #[error("{what} {index}: radius must be positive (got {radius})")]
    NonPositiveRadius {
        what: &'static str,
        index: usize,
        radius: f32,
    },

    #[error("{what} {index}: glossiness must be positive (got {glossiness})")]
    NonPositiveGlossiness {
        what: &'static str,
        index: usize,
        glossiness: f32,
    },

    #[error("{what} {index}: {field} must lie in [0, 1] (got {value})")]
    WeightOutOfRange {
        what: &'static str,
        index: usize,
        field: &'static str,
        value: f32,
    },

    #[error("{what} {index}: contains a non-finite value")]
    NonFinite { what: &'static str, index: usize },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// An isotropic point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,

    /// Radiant intensity (RGB, may exceed 1)
    pub color: Vec3,
}

impl PointLight {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// A sphere given by center and radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// An infinite plane `{x : dot(x, normal) + offset = 0}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal, reported unchanged for every hit
    pub normal: Vec3,
    pub offset: f32,
    pub material: Material,
}

impl Plane {
    pub fn new(normal: Vec3, offset: f32, material: Material) -> Self {
        Self {
            normal,
            offset,
            material,
        }
    }
}

/// An infinite, uncapped cylinder around the line `axis_point + s * axis_direction`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    pub axis_point: Vec3,

    /// Unit axis direction
    pub axis_direction: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Cylinder {
    pub fn new(axis_point: Vec3, axis_direction: Vec3, radius: f32, material: Material) -> Self {
        Self {
            axis_point,
            axis_direction,
            radius,
            material,
        }
    }
}

/// A complete scene: ambient light, point lights and primitives.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene name (usually from filename)
    #[serde(default)]
    pub name: String,

    /// Ambient light, multiplied by each surface's diffuse color
    #[serde(default)]
    pub ambient: Vec3,

    #[serde(default)]
    pub lights: Vec<PointLight>,

    #[serde(default)]
    pub spheres: Vec<Sphere>,

    #[serde(default)]
    pub planes: Vec<Plane>,

    #[serde(default)]
    pub cylinders: Vec<Cylinder>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the ambient term.
    pub fn with_ambient(mut self, ambient: Vec3) -> Self {
        self.ambient = ambient;
        self
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: PointLight) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    /// Add a sphere and return its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    /// Add a plane and return its index.
    pub fn add_plane(&mut self, plane: Plane) -> usize {
        self.planes.push(plane);
        self.planes.len() - 1
    }

    /// Add a cylinder and return its index.
    pub fn add_cylinder(&mut self, cylinder: Cylinder) -> usize {
        self.cylinders.push(cylinder);
        self.cylinders.len() - 1
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Get total primitive count across all three kinds.
    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.planes.len() + self.cylinders.len()
    }

    /// Check the preconditions the intersection code relies on.
    ///
    /// Reports the first problem found. Lights come first, then spheres,
    /// planes and cylinders, each in list order.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.ambient.is_finite() {
            return Err(SceneError::NonFinite {
                what: "ambient",
                index: 0,
            });
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !light.position.is_finite() || !light.color.is_finite() {
                return Err(SceneError::NonFinite {
                    what: "light",
                    index,
                });
            }
        }

        for (index, sphere) in self.spheres.iter().enumerate() {
            let what = "sphere";
            if !sphere.center.is_finite() || !sphere.radius.is_finite() {
                return Err(SceneError::NonFinite { what, index });
            }
            check_radius(what, index, sphere.radius)?;
            check_material(what, index, &sphere.material)?;
        }

        for (index, plane) in self.planes.iter().enumerate() {
            let what = "plane";
            if !plane.normal.is_finite() || !plane.offset.is_finite() {
                return Err(SceneError::NonFinite { what, index });
            }
            check_unit(what, index, "normal", plane.normal)?;
            check_material(what, index, &plane.material)?;
        }

        for (index, cylinder) in self.cylinders.iter().enumerate() {
            let what = "cylinder";
            if !cylinder.axis_point.is_finite()
                || !cylinder.axis_direction.is_finite()
                || !cylinder.radius.is_finite()
            {
                return Err(SceneError::NonFinite { what, index });
            }
            check_unit(what, index, "axis_direction", cylinder.axis_direction)?;
            check_radius(what, index, cylinder.radius)?;
            check_material(what, index, &cylinder.material)?;
        }

        Ok(())
    }

    /// The built-in demo scene: three spheres (paper, plastic, glass), a
    /// mirror floor, two tilted cylinders and two colored lights.
    pub fn showcase() -> Self {
        let mut scene = Scene::new("showcase").with_ambient(Vec3::new(0.12, 0.15, 0.2));

        scene.add_light(PointLight::new(
            Vec3::new(5.0, 15.0, -5.0),
            0.5 * Vec3::new(0.8, 0.6, 0.5),
        ));
        scene.add_light(PointLight::new(
            Vec3::new(-15.0, 10.0, 2.0),
            0.5 * Vec3::new(0.5, 0.7, 1.0),
        ));

        scene.add_sphere(Sphere::new(Vec3::new(8.0, -2.0, -13.0), 4.0, Material::paper()));
        scene.add_sphere(Sphere::new(Vec3::new(-7.0, -1.0, -13.0), 4.0, Material::plastic()));
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.5, -5.0), 2.0, Material::glass()));

        scene.add_plane(Plane::new(Vec3::Y, 4.5, Material::steel_mirror()));

        scene.add_cylinder(Cylinder::new(
            Vec3::new(-1.0, 1.0, -18.0),
            Vec3::new(-1.0, 2.0, -1.0).normalize(),
            1.5,
            Material::paper(),
        ));
        scene.add_cylinder(Cylinder::new(
            Vec3::new(3.0, 1.0, -5.0),
            Vec3::new(1.0, 4.0, 1.0).normalize(),
            0.25,
            Material::plastic(),
        ));

        scene
    }
}

fn check_unit(what: &'static str, index: usize, field: &'static str, v: Vec3) -> SceneResult<()> {
    let length = v.length();
    if (length - 1.0).abs() > UNIT_LENGTH_TOLERANCE {
        return Err(SceneError::NonUnitVector {
            what,
            index,
            field,
            length,
        });
    }
    Ok(())
}

fn check_radius(what: &'static str, index: usize, radius: f32) -> SceneResult<()> {
    if radius <= 0.0 {
        return Err(SceneError::NonPositiveRadius {
            what,
            index,
            radius,
        });
    }
    Ok(())
}

fn check_material(what: &'static str, index: usize, material: &Material) -> SceneResult<()> {
    if !material.diffuse.is_finite()
        || !material.specular.is_finite()
        || !material.glossiness.is_finite()
    {
        return Err(SceneError::NonFinite { what, index });
    }

    if material.glossiness <= 0.0 {
        return Err(SceneError::NonPositiveGlossiness {
            what,
            index,
            glossiness: material.glossiness,
        });
    }

    for (field, value) in [
        ("reflectiveness", material.reflectiveness),
        ("refractiveness", material.refractiveness),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(SceneError::WeightOutOfRange {
                what,
                index,
                field,
                value,
            });
        }
    }

    Ok(())
}
