//! Session configuration and per-frame uniforms
//!
//! Two input bundles feed every kernel function: [`TorusConfig`] holds the
//! torus geometry and terrain tuning fixed for a render session, and
//! [`FrameUniforms`] holds the lighting and view values a frame-update
//! stage refreshes. Both are plain immutable value types passed by
//! reference, never read from globals, so a batch can share one snapshot
//! across every worker without synchronization.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Torus radii must satisfy `large_radius > small_radius > 0`
    #[error("invalid radii: large={large}, small={small} (need large > small > 0)")]
    InvalidRadii {
        /// Major radius as configured
        large: f32,
        /// Minor radius as configured
        small: f32,
    },

    /// Terrain resolution must be positive and finite
    #[error("invalid terrain resolution: {0} (need a positive finite value)")]
    InvalidResolution(f32),

    /// Sea and snow levels must satisfy `0 <= sea <= snow <= 1`
    #[error("invalid terrain levels: sea={sea}, snow={snow} (need 0 <= sea <= snow <= 1)")]
    InvalidLevels {
        /// Sea level as configured
        sea: f32,
        /// Snow level as configured
        snow: f32,
    },

    /// Light direction must be unit length
    #[error("invalid light direction: length {0} (need a unit vector)")]
    InvalidLightDirection(f32),

    /// Light ambience must lie in [0, 1]
    #[error("invalid light ambience: {0} (need a value in [0, 1])")]
    InvalidAmbience(f32),

    /// Zoom level must be positive and finite
    #[error("invalid zoom level: {0} (need a positive finite value)")]
    InvalidZoom(f32),
}

/// Torus geometry and terrain tuning, fixed for a render session
///
/// Read-only after initialization. [`validate`](TorusConfig::validate)
/// checks the invariants the kernel assumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TorusConfig {
    /// Major radius (core circle radius)
    pub large_radius: f32,
    /// Minor radius (tube radius)
    pub small_radius: f32,
    /// Base octave cutoff; multiplied by zoom and capped at 0.25
    pub terrain_resolution: f32,
    /// Finite-difference sampling step for normal estimation, scaled by zoom
    pub terrain_normal_resolution: f32,
    /// Height exaggeration applied to the normal perturbation
    pub terrain_normal_intensity: f32,
    /// Sea band threshold in [0, 1]; heights strictly below it render as sea
    pub sea_level: f32,
    /// Snow band threshold in [0, 1]; heights at or above it render as snow
    pub snow_level: f32,
}

impl Default for TorusConfig {
    fn default() -> Self {
        TorusConfig {
            large_radius: 2.0,
            small_radius: 0.5,
            terrain_resolution: 0.01,
            terrain_normal_resolution: 0.02,
            terrain_normal_intensity: 2.0,
            sea_level: 0.45,
            snow_level: 0.65,
        }
    }
}

impl TorusConfig {
    /// Check the session invariants the kernel assumes.
    ///
    /// The octave cutoff cap keeps the height loop alive for any positive
    /// resolution, so validation only has to reject non-positive or
    /// non-finite tuning values and mis-ordered sea/snow levels.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.large_radius.is_finite() && self.small_radius.is_finite())
            || self.small_radius <= 0.0
            || self.large_radius <= self.small_radius
        {
            return Err(ConfigError::InvalidRadii {
                large: self.large_radius,
                small: self.small_radius,
            });
        }

        if !self.terrain_resolution.is_finite() || self.terrain_resolution <= 0.0 {
            return Err(ConfigError::InvalidResolution(self.terrain_resolution));
        }

        if !(self.sea_level >= 0.0 && self.sea_level <= self.snow_level && self.snow_level <= 1.0)
        {
            return Err(ConfigError::InvalidLevels {
                sea: self.sea_level,
                snow: self.snow_level,
            });
        }

        Ok(())
    }
}

/// Lighting and view uniforms, refreshed once per frame
///
/// Shared read-only across every evaluation of a batch.
/// [`validate`](FrameUniforms::validate) checks the invariants the
/// kernel assumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameUniforms {
    /// Direction toward the light. Must be unit length; every kernel
    /// function assumes it without re-normalizing.
    pub light_direction: Vec3,
    /// Ambient floor in [0, 1], blended under the Lambert term
    pub light_ambience: f32,
    /// Positive view zoom; scales the octave cutoff and the normal
    /// sampling radius
    pub zoom_level: f32,
}

impl Default for FrameUniforms {
    fn default() -> Self {
        FrameUniforms {
            light_direction: Vec3::new(0.5, 1.0, 0.3).normalize(),
            light_ambience: 0.2,
            zoom_level: 1.0,
        }
    }
}

impl FrameUniforms {
    /// Build uniforms, normalizing the light direction.
    ///
    /// A zero-length direction falls back to straight overhead.
    pub fn new(light_direction: Vec3, light_ambience: f32, zoom_level: f32) -> Self {
        FrameUniforms {
            light_direction: light_direction.try_normalize().unwrap_or(Vec3::Y),
            light_ambience,
            zoom_level,
        }
    }

    /// Check the per-frame invariants the kernel assumes.
    ///
    /// Deserialization fills the fields directly, bypassing the
    /// normalization in [`new`](FrameUniforms::new), so loaded uniforms
    /// go through this check before shading.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let length = self.light_direction.length();
        if !length.is_finite() || (length - 1.0).abs() > 1e-4 {
            return Err(ConfigError::InvalidLightDirection(length));
        }

        if !(self.light_ambience >= 0.0 && self.light_ambience <= 1.0) {
            return Err(ConfigError::InvalidAmbience(self.light_ambience));
        }

        if !self.zoom_level.is_finite() || self.zoom_level <= 0.0 {
            return Err(ConfigError::InvalidZoom(self.zoom_level));
        }

        Ok(())
    }
}
