//! Mirror reflection, Snell refraction and Schlick's Fresnel term.

use crate::Vec3;

/// Reflect `incident` about `normal`.
///
/// `normal` is expected to be unit length; `incident` keeps its length.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

/// Bend `incident` through a surface with unit `normal` for the index
/// ratio `eta` (incoming over outgoing).
///
/// Returns `Vec3::ZERO` on total internal reflection.
#[inline]
pub fn refract(incident: Vec3, normal: Vec3, eta: f32) -> Vec3 {
    let cos_i = normal.dot(incident);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        eta * incident - (eta * cos_i + k.sqrt()) * normal
    }
}

/// Schlick's approximation of the Fresnel reflectance.
pub fn fresnel_schlick(
    view_direction: Vec3,
    normal: Vec3,
    outgoing_index: f32,
    incoming_index: f32,
) -> f32 {
    let r0 = ((outgoing_index - incoming_index) / (outgoing_index + incoming_index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - view_direction.dot(normal).abs()).powi(5)
}
