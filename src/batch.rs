//! Batch and chart evaluation
//!
//! Shades slices of points serially or across the rayon pool, and
//! rasterizes whole parameter-space charts of the torus. The parallel
//! paths produce bitwise-identical output to the serial ones; rayon
//! only changes who evaluates which point.
//!
//! Author: Moroya Sakamoto

use crate::config::{FrameUniforms, TorusConfig};
use crate::shade::shade;
use crate::torus::torus_point;
use glam::{Vec3, Vec4};
use rayon::prelude::*;
use std::f32::consts::TAU;

/// Shades each point in order on the calling thread.
pub fn shade_batch(points: &[Vec3], config: &TorusConfig, uniforms: &FrameUniforms) -> Vec<Vec4> {
    points.iter().map(|&p| shade(p, config, uniforms)).collect()
}

/// Shades each point across the rayon thread pool.
///
/// Output order matches the input slice, element for element.
pub fn shade_batch_parallel(
    points: &[Vec3],
    config: &TorusConfig,
    uniforms: &FrameUniforms,
) -> Vec<Vec4> {
    points.par_iter().map(|&p| shade(p, config, uniforms)).collect()
}

/// Rasterizes a full chart of the torus surface.
///
/// The chart is row-major over tube rows: the color for ring step `t`
/// and tube step `p` lands at `p * theta_steps + t`. Angles sweep the
/// full turn in `theta_steps` and `phi_steps` increments. Rows are
/// shaded in parallel. Zero steps on either axis yield an empty chart.
pub fn shade_chart(
    config: &TorusConfig,
    uniforms: &FrameUniforms,
    theta_steps: usize,
    phi_steps: usize,
) -> Vec<Vec4> {
    if theta_steps == 0 || phi_steps == 0 {
        return Vec::new();
    }

    let mut colors = vec![Vec4::ZERO; theta_steps * phi_steps];
    colors
        .par_chunks_mut(theta_steps)
        .enumerate()
        .for_each(|(row, chunk)| {
            let phi = (row as f32) / (phi_steps as f32) * TAU;
            for (col, out) in chunk.iter_mut().enumerate() {
                let theta = (col as f32) / (theta_steps as f32) * TAU;
                *out = shade(torus_point(theta, phi, config), config, uniforms);
            }
        });

    colors
}
