//! # torus-shade
//!
//! **Procedurally shaded terrain on a torus**
//!
//! A per-point shading kernel for a torus-shaped world: multi-octave
//! lattice noise builds a height field over the shell, finite
//! differences perturb the analytic tube normal, a closed-form ray test
//! handles the shadow the ring casts on itself, and the result is
//! banded into sea, land, and snow colors.
//!
//! ## Features
//!
//! - **Height field**: multi-octave lattice noise, resolution-bounded by zoom
//! - **Normals**: finite-difference perturbation of the analytic tube normal
//! - **Self-shadowing**: closed-form ray/torus occlusion, no marching
//! - **Banding**: sea / land / snow RGBA coloring
//! - **Batch**: serial, rayon-parallel, and 8-wide SIMD evaluation
//!
//! ## Example
//!
//! ```rust
//! use torus_shade::prelude::*;
//!
//! let config = TorusConfig::default();
//! let uniforms = FrameUniforms::default();
//!
//! // Shade one point on the outer equator
//! let color = shade(Vec3::new(2.5, 0.0, 0.0), &config, &uniforms);
//! assert_eq!(color.w, 1.0);
//!
//! // Rasterize a small chart of the whole surface
//! let chart = shade_chart(&config, &uniforms, 64, 16);
//! assert_eq!(chart.len(), 64 * 16);
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod height;
pub mod noise;
pub mod normal;
pub mod shade;
pub mod shadow;
pub mod simd;
pub mod torus;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::batch::{shade_batch, shade_batch_parallel, shade_chart};
    pub use crate::config::{ConfigError, FrameUniforms, TorusConfig};
    pub use crate::height::{get_height, height_at_resolution, RESOLUTION_CAP};
    pub use crate::noise::{hash, noise_3d};
    pub use crate::normal::estimate_normal;
    pub use crate::shade::{band_color, shade, shade_sample, SurfaceSample};
    pub use crate::shadow::is_shadowed;
    pub use crate::simd::{is_shadowed_x8, shade_batch_simd, shade_x8, Vec3x8};
    pub use crate::torus::{snap_to_torus, torus_point, SurfaceFrame};
    pub use glam::{Vec2, Vec3, Vec4};
}

// Re-exports for convenience
pub use config::{FrameUniforms, TorusConfig};
pub use shade::{shade, shade_sample};
