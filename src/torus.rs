//! Torus surface geometry
//!
//! Maps arbitrary evaluation points onto the torus shell and hands back
//! the local frame the shading stages work in: the snapped surface
//! point, the analytic tube normal, and a tangent running along the
//! ring. Also provides the parametric inverse for generating sample
//! points from ring/tube angles.
//!
//! Author: Moroya Sakamoto

use crate::config::TorusConfig;
use glam::Vec3;

/// Local surface frame at a snapped torus point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceFrame {
    /// Point on the torus shell.
    pub point: Vec3,
    /// Analytic tube normal (unit length, pointing out of the tube).
    pub normal: Vec3,
    /// Tangent along the ring direction (unit length).
    pub tangent: Vec3,
}

/// Snaps `point` onto the torus shell and builds its surface frame.
///
/// The ring direction comes from projecting `point` into the XZ plane;
/// the tube normal from the offset between `point` and the ring circle.
/// Points on the Y axis fall back to the +X ring direction and points
/// exactly on the ring circle to a +Y normal, so the result is always a
/// well-formed frame.
#[inline]
pub fn snap_to_torus(point: Vec3, config: &TorusConfig) -> SurfaceFrame {
    let flat = Vec3::new(point.x, 0.0, point.z);
    let flat_len_sq = flat.length_squared();
    let ring_direction = if flat_len_sq < 1e-20 {
        Vec3::X
    } else {
        flat / flat_len_sq.sqrt()
    };

    let offset = point - ring_direction * config.large_radius;
    let offset_len_sq = offset.length_squared();
    let normal = if offset_len_sq < 1e-20 {
        Vec3::Y
    } else {
        offset / offset_len_sq.sqrt()
    };

    SurfaceFrame {
        point: ring_direction * config.large_radius + normal * config.small_radius,
        normal,
        tangent: Vec3::new(ring_direction.z, 0.0, -ring_direction.x),
    }
}

/// Point on the torus shell at ring angle `theta` and tube angle `phi`.
#[inline]
pub fn torus_point(theta: f32, phi: f32, config: &TorusConfig) -> Vec3 {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let ring = config.large_radius + config.small_radius * cos_phi;
    Vec3::new(
        ring * cos_theta,
        config.small_radius * sin_phi,
        ring * sin_theta,
    )
}
