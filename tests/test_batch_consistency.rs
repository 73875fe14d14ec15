//! Integration tests: Batch and SIMD consistency
//!
//! The rayon, chart, and 8-wide paths must reproduce the scalar
//! pipeline bit for bit, remainder lanes included.
//!
//! Author: Moroya Sakamoto

mod common;

use common::*;
use std::f32::consts::TAU;
use torus_shade::prelude::*;

// ============================================================================
// Rayon batches
// ============================================================================

#[test]
fn parallel_matches_serial_bitwise() {
    let config = test_config();
    let uniforms = test_uniforms();
    let points = shell_grid(20, 15);

    let serial = shade_batch(&points, &config, &uniforms);
    let parallel = shade_batch_parallel(&points, &config, &uniforms);
    assert_eq!(serial.len(), parallel.len());
    for (i, (s, p)) in serial.iter().zip(&parallel).enumerate() {
        assert_color_eq(*s, *p, &format!("divergence at point {}", i));
    }
}

#[test]
fn batch_preserves_input_order() {
    let config = test_config();
    let uniforms = test_uniforms();
    let points = off_shell_points();

    let colors = shade_batch(&points, &config, &uniforms);
    for (p, c) in points.iter().zip(&colors) {
        assert_color_eq(*c, shade(*p, &config, &uniforms), "order mismatch");
    }
}

#[test]
fn empty_inputs_yield_empty_outputs() {
    let config = test_config();
    let uniforms = test_uniforms();

    assert!(shade_batch(&[], &config, &uniforms).is_empty());
    assert!(shade_batch_parallel(&[], &config, &uniforms).is_empty());
    assert!(shade_batch_simd(&[], &config, &uniforms).is_empty());
    assert!(shade_chart(&config, &uniforms, 0, 8).is_empty());
    assert!(shade_chart(&config, &uniforms, 16, 0).is_empty());
}

// ============================================================================
// Charts
// ============================================================================

#[test]
fn chart_matches_point_evaluation() {
    let config = test_config();
    let uniforms = test_uniforms();
    let chart = shade_chart(&config, &uniforms, 32, 16);
    assert_eq!(chart.len(), 32 * 16);

    for (col, row) in [(0usize, 0usize), (5, 3), (17, 9), (31, 15)] {
        let theta = (col as f32) / 32.0 * TAU;
        let phi = (row as f32) / 16.0 * TAU;
        let direct = shade(torus_point(theta, phi, &config), &config, &uniforms);
        assert_color_eq(
            chart[row * 32 + col],
            direct,
            &format!("cell ({}, {})", col, row),
        );
    }
}

#[test]
fn chart_equals_batch_over_the_same_grid() {
    let config = test_config();
    let uniforms = test_uniforms();

    let chart = shade_chart(&config, &uniforms, 16, 8);
    let batch = shade_batch(&shell_grid(16, 8), &config, &uniforms);
    assert_eq!(chart.len(), batch.len());
    for (i, (a, b)) in chart.iter().zip(&batch).enumerate() {
        assert_color_eq(*a, *b, &format!("cell {}", i));
    }
}

// ============================================================================
// SIMD lanes
// ============================================================================

#[test]
fn simd_batch_matches_scalar_batch() {
    let config = test_config();
    let uniforms = test_uniforms();
    let points = shell_grid(5, 4);

    let simd = shade_batch_simd(&points, &config, &uniforms);
    let scalar = shade_batch(&points, &config, &uniforms);
    assert_eq!(simd.len(), scalar.len());
    for (i, (s, c)) in simd.iter().zip(&scalar).enumerate() {
        assert_color_eq(*s, *c, &format!("lane divergence at point {}", i));
    }
}

#[test]
fn simd_batch_handles_ragged_tail() {
    let config = test_config();
    let uniforms = test_uniforms();
    let points = shell_grid(9, 3);

    // 13 points: one full chunk of 8 plus a 5-lane remainder.
    let tail = &points[..13];
    let simd = shade_batch_simd(tail, &config, &uniforms);
    let scalar = shade_batch(tail, &config, &uniforms);
    assert_eq!(simd.len(), 13);
    for (i, (s, c)) in simd.iter().zip(&scalar).enumerate() {
        assert_color_eq(*s, *c, &format!("tail divergence at point {}", i));
    }
}

#[test]
fn shade_x8_matches_scalar_lanes() {
    let config = test_config();
    let uniforms = test_uniforms();

    let grid = shell_grid(4, 2);
    let mut lanes = [Vec3::ZERO; 8];
    lanes.copy_from_slice(&grid[..8]);

    let colors = shade_x8(Vec3x8::from_vecs(lanes), &config, &uniforms);
    for (i, p) in lanes.iter().enumerate() {
        assert_color_eq(
            colors[i],
            shade(*p, &config, &uniforms),
            &format!("lane {}", i),
        );
    }
}

#[test]
fn is_shadowed_x8_matches_scalar() {
    let config = test_config();
    let uniforms = overhead_uniforms();

    let mut lanes = [Vec3::ZERO; 8];
    for (i, p) in lanes.iter_mut().enumerate() {
        let phi = if i % 2 == 0 { 4.0 } else { 2.3 };
        *p = torus_point((i as f32) / 8.0 * TAU, phi, &config);
    }

    let flags = is_shadowed_x8(Vec3x8::from_vecs(lanes), &config, &uniforms);
    for (i, p) in lanes.iter().enumerate() {
        assert_eq!(flags[i], is_shadowed(*p, &config, &uniforms), "lane {}", i);
    }
    assert!(flags.iter().any(|&f| f), "no shadowed lane in the mix");
    assert!(flags.iter().any(|&f| !f), "no lit lane in the mix");
}

#[test]
fn simd_matches_scalar_under_varied_lighting() {
    let config = test_config();
    let points = shell_grid(48, 48);

    // Angled, overhead, and grazing light with different ambience and
    // octave budgets; shadow and band masks flip across the setups.
    let setups = [
        test_uniforms(),
        overhead_uniforms(),
        FrameUniforms::new(Vec3::new(-1.0, 0.1, 0.0), 0.35, 4.0),
    ];

    for (setup, uniforms) in setups.iter().enumerate() {
        let scalar = shade_batch(&points, &config, uniforms);
        let simd = shade_batch_simd(&points, &config, uniforms);
        assert_eq!(scalar.len(), simd.len());
        for (i, (s, v)) in scalar.iter().zip(&simd).enumerate() {
            assert_color_eq(*s, *v, &format!("setup {} point {}", setup, i));
        }
    }
}
