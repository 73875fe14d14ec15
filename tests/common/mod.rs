//! Common test helpers for torus-shade integration tests
//!
//! Author: Moroya Sakamoto

use std::f32::consts::TAU;
use torus_shade::prelude::*;

// ============================================================================
// Standard configurations
// ============================================================================

/// Default torus geometry and band levels
pub fn test_config() -> TorusConfig {
    TorusConfig::default()
}

/// Default frame state: angled light, 0.2 ambience, zoom 1
pub fn test_uniforms() -> FrameUniforms {
    FrameUniforms::default()
}

/// Frame with the light straight overhead, for shadow geometry tests
#[allow(dead_code)]
pub fn overhead_uniforms() -> FrameUniforms {
    FrameUniforms::new(Vec3::Y, 0.2, 1.0)
}

// ============================================================================
// Standard test points
// ============================================================================

/// Shell points on a full theta x phi grid, row-major over phi rows
pub fn shell_grid(theta_steps: usize, phi_steps: usize) -> Vec<Vec3> {
    let config = test_config();
    let mut points = Vec::with_capacity(theta_steps * phi_steps);
    for j in 0..phi_steps {
        for i in 0..theta_steps {
            let theta = (i as f32) / (theta_steps as f32) * TAU;
            let phi = (j as f32) / (phi_steps as f32) * TAU;
            points.push(torus_point(theta, phi, &config));
        }
    }
    points
}

/// Points off the shell: scaled, lifted, near the axis, near the ring
#[allow(dead_code)]
pub fn off_shell_points() -> Vec<Vec3> {
    let config = test_config();
    vec![
        torus_point(0.8, 1.3, &config) * 1.3,
        torus_point(2.1, 4.6, &config) * 0.7,
        torus_point(5.0, 0.2, &config) + Vec3::new(0.0, 0.8, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(config.large_radius, 0.0, 0.0),
        Vec3::new(-3.0, 0.4, 2.5),
    ]
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two f32 values are close within tolerance
#[allow(dead_code)]
pub fn assert_close(a: f32, b: f32, tol: f32, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}

/// Assert two colors are bitwise identical, lane for lane
#[allow(dead_code)]
pub fn assert_color_eq(a: Vec4, b: Vec4, msg: &str) {
    assert_eq!(
        a.to_array().map(f32::to_bits),
        b.to_array().map(f32::to_bits),
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}
