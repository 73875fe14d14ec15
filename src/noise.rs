//! Integer hash and lattice value noise
//!
//! Faithful CPU port of the integer-hash value noise driving the terrain
//! height field. The chain:
//! 1. Hash: XOR with a fixed constant, then three wrapping multiply +
//!    shift-XOR rounds, normalized by `u32::MAX` into [0, 1].
//! 2. Lattice fold: each axis folds its cell coordinate into the seed as
//!    `seed * 0x05555555 + cell` (wrapping), z first, then y, then x.
//! 3. Trilinear blend: nested unclamped lerps by the fractional offsets.
//!
//! At exact integer coordinates the blend collapses to a raw hash value,
//! anchoring the field to the lattice; between cells it is C0-continuous.
//! The octave index enters as the initial seed of [`noise_3d`], which
//! decorrelates octaves without extra state.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// XOR constant applied to the seed before the first multiply round.
pub const HASH_XOR: u32 = 2747636419;

/// Multiplier for all three mix rounds (Knuth's 2^32 / phi).
pub const HASH_MUL: u32 = 2654435769;

/// Right-shift amount for the shift-XOR mix steps.
pub const HASH_SHIFT: u32 = 16;

/// Seed stride folding one lattice cell coordinate into the hash seed.
pub const SEED_STRIDE: u32 = 0x0555_5555;

/// Mix a 32-bit seed into a pseudo-uniform value in [0, 1].
///
/// Matches the GPU hash exactly, including the `u32::MAX` normalization
/// at the end; the round order is part of the contract.
#[inline(always)]
pub fn hash(x: u32) -> f32 {
    let mut x = x ^ HASH_XOR;
    x = x.wrapping_mul(HASH_MUL);
    x ^= x >> HASH_SHIFT;
    x = x.wrapping_mul(HASH_MUL);
    x ^= x >> HASH_SHIFT;
    x = x.wrapping_mul(HASH_MUL);

    x as f32 / u32::MAX as f32
}

/// Unclamped linear interpolation.
#[inline(always)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// One lattice axis: fold the cell coordinate into the seed, then blend
/// the two bounding hash values by the fractional offset.
///
/// `floor_value` is the floor of `value`, passed in rather than recomputed
/// so callers sharing one floored point across axes pay for it once.
/// Negative cells wrap through the `i32 -> u32` cast, which is exactly the
/// unsigned conversion the hash expects.
#[inline]
pub fn noise_1d(value: f32, floor_value: f32, seed: u32) -> f32 {
    let seed = seed
        .wrapping_mul(SEED_STRIDE)
        .wrapping_add(floor_value as i32 as u32);

    lerp(hash(seed), hash(seed.wrapping_add(1)), value - floor_value)
}

/// Bilinear lattice noise over the x and y axes.
#[inline]
pub fn noise_2d(point: Vec3, floor_point: Vec3, seed: u32) -> f32 {
    let seed = seed
        .wrapping_mul(SEED_STRIDE)
        .wrapping_add(floor_point.y as i32 as u32);

    lerp(
        noise_1d(point.x, floor_point.x, seed),
        noise_1d(point.x, floor_point.x, seed.wrapping_add(1)),
        point.y - floor_point.y,
    )
}

/// Trilinear lattice noise.
///
/// `seed` doubles as the octave channel: successive octaves pass 0, 1, 2,
/// ... and land in disjoint regions of the hash domain through the fold.
#[inline]
pub fn noise_3d(point: Vec3, floor_point: Vec3, seed: u32) -> f32 {
    let seed = seed
        .wrapping_mul(SEED_STRIDE)
        .wrapping_add(floor_point.z as i32 as u32);

    lerp(
        noise_2d(point, floor_point, seed),
        noise_2d(point, floor_point, seed.wrapping_add(1)),
        point.z - floor_point.z,
    )
}
