//! Closed-form torus self-shadowing
//!
//! Tests whether a shell point lies in the shadow the torus casts on
//! itself, without marching the light ray. The ray is advanced by a
//! single closed-form parameter toward the far side of the tube, and
//! the advanced point is plugged into the implicit torus equation
//! `(sqrt(x^2 + z^2) - R)^2 + y^2 <= r^2`, expanded so only one square
//! root is evaluated. A non-positive value means the ray re-enters the
//! shell before escaping, so the point is shadowed.
//!
//! Only inner-hemisphere points can be self-shadowed; the shading stage
//! gates on that before calling in here.
//!
//! Author: Moroya Sakamoto

use crate::config::{FrameUniforms, TorusConfig};
use glam::Vec3;

/// Whether the torus occludes the light arriving at `point`.
#[inline]
pub fn is_shadowed(point: Vec3, config: &TorusConfig, uniforms: &FrameUniforms) -> bool {
    let light = uniforms.light_direction;
    let large = config.large_radius;
    let small = config.small_radius;

    let point_light_y = point.y * light.y;
    let point_light_dot = point.dot(light);

    // Parameter advancing the ray to where it could meet the opposite
    // side of the tube. Non-positive means the ray leaves immediately.
    let t =
        small - point_light_y * point_light_y / small - 2.0 * (point_light_dot - point_light_y);
    if t <= 0.0 {
        return false;
    }

    let radicand = point.x * point.x
        + point.z * point.z
        + 2.0 * t * (point_light_dot - point_light_y)
        + t * t * (light.x * light.x + light.z * light.z);
    let distance = (large + small) * (large - small)
        + point.length_squared()
        + 2.0 * t * point_light_dot
        + t * t
        - 2.0 * large * radicand.max(0.0).sqrt();

    distance <= 0.0
}
