//! Multi-octave terrain height field
//!
//! Accumulates lattice noise over a geometrically warped domain: each
//! octave doubles the sampling frequency, offsets the domain by 0.5 so
//! octaves never self-align, halves the weight, and bumps the hash
//! channel. The weighted sum is normalized by the total weight, keeping
//! the result in [0, 1].
//!
//! The octave sequence is resolution-bounded: octaves run while their
//! scale exceeds the effective resolution `min(zoom * terrain_resolution,`
//! [`RESOLUTION_CAP`]`)`, so zooming in adds fine octaves and zooming out
//! drops them.
//!
//! Author: Moroya Sakamoto

use crate::config::{FrameUniforms, TorusConfig};
use crate::noise::noise_3d;
use glam::Vec3;

/// Finest octave cutoff the height field will ever use, regardless of
/// zoom. Since octave scales start at 0.5, the cap guarantees at least
/// one octave runs for any positive resolution.
pub const RESOLUTION_CAP: f32 = 0.25;

/// One step of the octave fold: sampling point, weight, hash channel.
#[derive(Clone, Copy, Debug)]
struct Octave {
    point: Vec3,
    scale: f32,
    channel: u32,
}

impl Octave {
    #[inline]
    fn next(&self) -> Octave {
        Octave {
            point: self.point * 2.0 + 0.5,
            scale: self.scale * 0.5,
            channel: self.channel + 1,
        }
    }
}

/// Terrain height at `point`, in [0, 1].
#[inline]
pub fn get_height(point: Vec3, config: &TorusConfig, uniforms: &FrameUniforms) -> f32 {
    let resolution = (uniforms.zoom_level * config.terrain_resolution).min(RESOLUTION_CAP);
    height_at_resolution(point, resolution)
}

/// Height fold at an explicit octave cutoff.
///
/// Octaves start at scale 0.5 and run while their scale exceeds
/// `resolution`. When no octave qualifies (`resolution >= 0.5`, which the
/// capped [`get_height`] entry can never produce) the fold returns 0
/// rather than dividing by a zero total weight.
pub fn height_at_resolution(point: Vec3, resolution: f32) -> f32 {
    let first = Octave {
        point,
        scale: 0.5,
        channel: 0,
    };

    let (sum, total) = std::iter::successors(Some(first), |octave| Some(octave.next()))
        .take_while(|octave| octave.scale > resolution)
        .fold((0.0f32, 0.0f32), |(sum, total), octave| {
            let sample = noise_3d(octave.point, octave.point.floor(), octave.channel);
            (sum + sample * octave.scale, total + octave.scale)
        });

    if total <= 0.0 {
        return 0.0;
    }

    sum / total
}
