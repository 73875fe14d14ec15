//! Per-point shading and color banding
//!
//! Ties the stages together: snap the input onto the shell, evaluate
//! the height field, perturb the normal, light it with a Lambert term
//! over an ambient floor, apply the self-shadow test, and band the
//! result into RGBA. Color channels gate on the height bands: below sea
//! level only blue survives, between sea and snow blue and green, and
//! snow passes all three for white peaks.
//!
//! Author: Moroya Sakamoto

use crate::config::{FrameUniforms, TorusConfig};
use crate::height::get_height;
use crate::normal::estimate_normal;
use crate::shadow::is_shadowed;
use crate::torus::snap_to_torus;
use glam::{Vec2, Vec3, Vec4};

/// Fully evaluated shading record for one surface point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSample {
    /// Snapped point on the torus shell.
    pub point: Vec3,
    /// Terrain-perturbed unit normal.
    pub normal: Vec3,
    /// Terrain height in [0, 1].
    pub height: f32,
    /// Whether the torus blocks the light at this point.
    pub shadowed: bool,
    /// Banded RGBA color.
    pub color: Vec4,
}

/// Bands a scalar luminance into RGBA by the height `surface_value`.
///
/// Red is zeroed below the snow line and green below sea level; blue
/// always carries `luminance * surface_value`. Alpha is always 1.
#[inline]
pub fn band_color(surface_value: f32, luminance: f32, config: &TorusConfig) -> Vec4 {
    let lit = luminance * surface_value;
    Vec4::new(
        if surface_value < config.snow_level { 0.0 } else { lit },
        if surface_value < config.sea_level { 0.0 } else { lit },
        lit,
        1.0,
    )
}

/// Shades one evaluation point into a banded RGBA color.
#[inline]
pub fn shade(point: Vec3, config: &TorusConfig, uniforms: &FrameUniforms) -> Vec4 {
    shade_sample(point, config, uniforms).color
}

/// Shades one evaluation point, returning the full sample record.
pub fn shade_sample(point: Vec3, config: &TorusConfig, uniforms: &FrameUniforms) -> SurfaceSample {
    let frame = snap_to_torus(point, config);
    let height = get_height(frame.point, config, uniforms);
    let normal = estimate_normal(&frame, height, config, uniforms);

    let lambert = normal.dot(uniforms.light_direction).max(0.0);
    let mut luminance = lambert * (1.0 - uniforms.light_ambience) + uniforms.light_ambience;

    // Only the inner hemisphere can receive the torus's own shadow.
    let inner = Vec2::new(frame.point.x, frame.point.z).length() < config.large_radius;
    let shadowed = inner && is_shadowed(frame.point, config, uniforms);
    if shadowed {
        luminance = uniforms.light_ambience;
    }

    SurfaceSample {
        point: frame.point,
        normal,
        height,
        shadowed,
        color: band_color(height, luminance, config),
    }
}
