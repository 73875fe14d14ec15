//! Finite-difference terrain normals
//!
//! Perturbs the analytic tube normal by the height field: two tangent
//! probes sample the terrain a small step along the ring and tube
//! directions, each probe is lifted along the analytic normal by its
//! height delta, and the perturbed normal is the cross product of the
//! two probes. Sea points keep the analytic normal untouched, so the
//! water renders as a smooth shell.
//!
//! Author: Moroya Sakamoto

use crate::config::{FrameUniforms, TorusConfig};
use crate::height::get_height;
use crate::torus::SurfaceFrame;
use glam::Vec3;

/// Terrain-perturbed surface normal at `frame`.
///
/// `surface_value` is the height already evaluated at `frame.point`;
/// passing it in avoids a redundant octave fold. At or below sea level
/// the analytic tube normal is returned as-is.
pub fn estimate_normal(
    frame: &SurfaceFrame,
    surface_value: f32,
    config: &TorusConfig,
    uniforms: &FrameUniforms,
) -> Vec3 {
    if surface_value <= config.sea_level {
        return frame.normal;
    }

    let step = uniforms.zoom_level * config.terrain_normal_resolution;
    let lift = config.small_radius * config.terrain_normal_intensity;

    let mut probe_a = frame.tangent * step;
    let mut probe_b = frame.normal.cross(frame.tangent) * step;

    let height_a = get_height(frame.point + probe_a, config, uniforms);
    let height_b = get_height(frame.point + probe_b, config, uniforms);

    probe_a += frame.normal * ((height_a - surface_value) * lift);
    probe_b += frame.normal * ((height_b - surface_value) * lift);

    let raw = probe_a.cross(probe_b);
    let len_sq = raw.length_squared();
    if len_sq < 1e-20 {
        return frame.normal;
    }
    raw / len_sq.sqrt()
}
