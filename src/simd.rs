//! 8-wide SIMD shading lanes
//!
//! Evaluates eight surface points at once on [`wide::f32x8`] vectors.
//! Every stage mirrors the scalar pipeline operation for operation, and
//! branches become mask blends that compute both sides, so each lane is
//! bit-identical to the corresponding scalar call. The octave fold
//! stays scalar per lane; its lattice arithmetic is integer-heavy and
//! gains nothing from lane parallelism.
//!
//! Author: Moroya Sakamoto

use crate::config::{FrameUniforms, TorusConfig};
use crate::height::{height_at_resolution, RESOLUTION_CAP};
use crate::shade::shade;
use glam::{Vec3, Vec4};
use std::ops::{Add, Div, Mul, Sub};
use wide::{f32x8, CmpLt, CmpGt, CmpLe};

// ============================================================================
// Vector type
// ============================================================================

/// Eight 3D vectors in structure-of-arrays layout.
#[derive(Clone, Copy, Debug)]
pub struct Vec3x8 {
    /// X components of all eight lanes.
    pub x: f32x8,
    /// Y components of all eight lanes.
    pub y: f32x8,
    /// Z components of all eight lanes.
    pub z: f32x8,
}

impl Vec3x8 {
    /// Builds from per-axis lane arrays.
    #[inline]
    pub fn new(x: [f32; 8], y: [f32; 8], z: [f32; 8]) -> Self {
        Self {
            x: f32x8::from(x),
            y: f32x8::from(y),
            z: f32x8::from(z),
        }
    }

    /// Transposes eight vectors into lane layout.
    #[inline]
    pub fn from_vecs(vecs: [Vec3; 8]) -> Self {
        let mut x = [0.0f32; 8];
        let mut y = [0.0f32; 8];
        let mut z = [0.0f32; 8];
        for (i, v) in vecs.iter().enumerate() {
            x[i] = v.x;
            y[i] = v.y;
            z[i] = v.z;
        }
        Self::new(x, y, z)
    }

    /// Broadcasts one vector to all lanes.
    #[inline]
    pub fn splat(v: Vec3) -> Self {
        Self {
            x: f32x8::splat(v.x),
            y: f32x8::splat(v.y),
            z: f32x8::splat(v.z),
        }
    }

    /// Per-lane dot product.
    #[inline]
    pub fn dot(self, rhs: Vec3x8) -> f32x8 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Per-lane squared length.
    #[inline]
    pub fn length_squared(self) -> f32x8 {
        self.dot(self)
    }

    /// Per-lane length.
    #[inline]
    pub fn length(self) -> f32x8 {
        self.length_squared().sqrt()
    }

    /// Per-lane cross product.
    #[inline]
    pub fn cross(self, rhs: Vec3x8) -> Vec3x8 {
        Vec3x8 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Lane-wise select: where `mask` is set take `a`, otherwise `b`.
    #[inline]
    pub fn select(mask: f32x8, a: Vec3x8, b: Vec3x8) -> Vec3x8 {
        Vec3x8 {
            x: mask.blend(a.x, b.x),
            y: mask.blend(a.y, b.y),
            z: mask.blend(a.z, b.z),
        }
    }

    /// Splits back into per-axis lane arrays.
    #[inline]
    pub fn to_arrays(self) -> ([f32; 8], [f32; 8], [f32; 8]) {
        (self.x.to_array(), self.y.to_array(), self.z.to_array())
    }
}

impl Add for Vec3x8 {
    type Output = Vec3x8;
    #[inline]
    fn add(self, rhs: Vec3x8) -> Vec3x8 {
        Vec3x8 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vec3x8 {
    type Output = Vec3x8;
    #[inline]
    fn sub(self, rhs: Vec3x8) -> Vec3x8 {
        Vec3x8 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f32x8> for Vec3x8 {
    type Output = Vec3x8;
    #[inline]
    fn mul(self, rhs: f32x8) -> Vec3x8 {
        Vec3x8 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f32x8> for Vec3x8 {
    type Output = Vec3x8;
    #[inline]
    fn div(self, rhs: f32x8) -> Vec3x8 {
        Vec3x8 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

// ============================================================================
// Pipeline stages
// ============================================================================

struct FrameX8 {
    point: Vec3x8,
    normal: Vec3x8,
    tangent: Vec3x8,
}

fn snap_x8(point: Vec3x8, config: &TorusConfig) -> FrameX8 {
    let eps = f32x8::splat(1e-20);
    let large = f32x8::splat(config.large_radius);
    let small = f32x8::splat(config.small_radius);

    let flat = Vec3x8 {
        x: point.x,
        y: f32x8::ZERO,
        z: point.z,
    };
    let flat_len_sq = flat.length_squared();
    let ring_direction = Vec3x8::select(
        flat_len_sq.cmp_lt(eps),
        Vec3x8::splat(Vec3::X),
        flat / flat_len_sq.sqrt(),
    );

    let offset = point - ring_direction * large;
    let offset_len_sq = offset.length_squared();
    let normal = Vec3x8::select(
        offset_len_sq.cmp_lt(eps),
        Vec3x8::splat(Vec3::Y),
        offset / offset_len_sq.sqrt(),
    );

    FrameX8 {
        point: ring_direction * large + normal * small,
        normal,
        tangent: Vec3x8 {
            x: ring_direction.z,
            y: f32x8::ZERO,
            z: -ring_direction.x,
        },
    }
}

/// Octave fold for eight lanes, run through the scalar fold per lane to
/// keep every lane bit-identical to [`height_at_resolution`].
fn height_x8(point: Vec3x8, resolution: f32) -> f32x8 {
    let (xs, ys, zs) = point.to_arrays();
    let mut heights = [0.0f32; 8];
    for i in 0..8 {
        heights[i] = height_at_resolution(Vec3::new(xs[i], ys[i], zs[i]), resolution);
    }
    f32x8::from(heights)
}

fn normal_x8(
    frame: &FrameX8,
    surface_value: f32x8,
    resolution: f32,
    config: &TorusConfig,
    uniforms: &FrameUniforms,
) -> Vec3x8 {
    let step = f32x8::splat(uniforms.zoom_level * config.terrain_normal_resolution);
    let lift = f32x8::splat(config.small_radius * config.terrain_normal_intensity);

    let mut probe_a = frame.tangent * step;
    let mut probe_b = frame.normal.cross(frame.tangent) * step;

    let height_a = height_x8(frame.point + probe_a, resolution);
    let height_b = height_x8(frame.point + probe_b, resolution);

    probe_a = probe_a + frame.normal * ((height_a - surface_value) * lift);
    probe_b = probe_b + frame.normal * ((height_b - surface_value) * lift);

    let raw = probe_a.cross(probe_b);
    let len_sq = raw.length_squared();
    let perturbed = Vec3x8::select(
        len_sq.cmp_lt(f32x8::splat(1e-20)),
        frame.normal,
        raw / len_sq.sqrt(),
    );

    // Sea lanes keep the analytic normal.
    let land = surface_value.cmp_gt(f32x8::splat(config.sea_level));
    Vec3x8::select(land, perturbed, frame.normal)
}

fn shadow_mask_x8(point: Vec3x8, config: &TorusConfig, uniforms: &FrameUniforms) -> f32x8 {
    let l = uniforms.light_direction;
    let light = Vec3x8::splat(l);
    let large = f32x8::splat(config.large_radius);
    let small = f32x8::splat(config.small_radius);
    let two = f32x8::splat(2.0);

    let point_light_y = point.y * light.y;
    let point_light_dot = point.dot(light);

    let t =
        small - point_light_y * point_light_y / small - two * (point_light_dot - point_light_y);
    let advancing = t.cmp_gt(f32x8::ZERO);

    let radicand = point.x * point.x
        + point.z * point.z
        + two * t * (point_light_dot - point_light_y)
        + t * t * f32x8::splat(l.x * l.x + l.z * l.z);
    let distance = (large + small) * (large - small)
        + point.length_squared()
        + two * t * point_light_dot
        + t * t
        - two * large * radicand.max(f32x8::ZERO).sqrt();

    // Lanes that exited early read as lit.
    advancing.blend(distance, f32x8::splat(1.0)).cmp_le(f32x8::ZERO)
}

// ============================================================================
// Public entry points
// ============================================================================

/// Self-shadow test for eight points at once.
#[inline]
pub fn is_shadowed_x8(points: Vec3x8, config: &TorusConfig, uniforms: &FrameUniforms) -> [bool; 8] {
    let mask = shadow_mask_x8(points, config, uniforms);
    mask.to_array().map(|lane| lane.to_bits() != 0)
}

/// Shades eight evaluation points at once.
///
/// Each output lane is bit-identical to [`crate::shade::shade`] on the
/// corresponding input point.
pub fn shade_x8(points: Vec3x8, config: &TorusConfig, uniforms: &FrameUniforms) -> [Vec4; 8] {
    let resolution = (uniforms.zoom_level * config.terrain_resolution).min(RESOLUTION_CAP);

    let frame = snap_x8(points, config);
    let height = height_x8(frame.point, resolution);
    let normal = normal_x8(&frame, height, resolution, config, uniforms);

    let light = Vec3x8::splat(uniforms.light_direction);
    let ambience = f32x8::splat(uniforms.light_ambience);
    let lambert = normal.dot(light).max(f32x8::ZERO);
    let lit = lambert * f32x8::splat(1.0 - uniforms.light_ambience) + ambience;

    let flat_len = (frame.point.x * frame.point.x + frame.point.z * frame.point.z).sqrt();
    let inner = flat_len.cmp_lt(f32x8::splat(config.large_radius));
    let shadow = shadow_mask_x8(frame.point, config, uniforms);
    let luminance = inner.blend(shadow.blend(ambience, lit), lit);

    let lit_color = luminance * height;
    let red = height
        .cmp_lt(f32x8::splat(config.snow_level))
        .blend(f32x8::ZERO, lit_color);
    let green = height
        .cmp_lt(f32x8::splat(config.sea_level))
        .blend(f32x8::ZERO, lit_color);

    let (rs, gs, bs) = (red.to_array(), green.to_array(), lit_color.to_array());
    let mut colors = [Vec4::ZERO; 8];
    for i in 0..8 {
        colors[i] = Vec4::new(rs[i], gs[i], bs[i], 1.0);
    }
    colors
}

/// Shades a point slice through the 8-wide path, falling back to the
/// scalar pipeline for the remainder lanes.
pub fn shade_batch_simd(
    points: &[Vec3],
    config: &TorusConfig,
    uniforms: &FrameUniforms,
) -> Vec<Vec4> {
    let mut colors = Vec::with_capacity(points.len());

    let mut chunks = points.chunks_exact(8);
    for chunk in &mut chunks {
        let mut lanes = [Vec3::ZERO; 8];
        lanes.copy_from_slice(chunk);
        colors.extend_from_slice(&shade_x8(Vec3x8::from_vecs(lanes), config, uniforms));
    }
    for &point in chunks.remainder() {
        colors.push(shade(point, config, uniforms));
    }

    colors
}
