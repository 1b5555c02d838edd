// Host-side tests for the renderer's CPU-side geometry.

#![allow(dead_code)]
mod mesh {
    include!("../src/mesh.rs");
}

use mesh::*;

#[test]
fn quad_spans_unit_square_facing_plus_z() {
    for c in QUAD_CORNERS {
        assert!(c[0].abs() == 0.5 && c[1].abs() == 0.5);
    }
    // Both triangles wind counter-clockwise when seen from +Z.
    for tri in QUAD_CORNERS.chunks(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
        assert!(cross > 0.0);
    }
}

#[test]
fn wireframe_has_expected_counts() {
    let (positions, indices) = wireframe_sphere(32, 32);
    assert_eq!(positions.len(), 33 * 33);
    assert_eq!(indices.len(), 2 * 32 * (2 * 32 - 1));
    assert_eq!(indices.len() % 2, 0);
    assert!(indices.iter().all(|&i| (i as usize) < positions.len()));
}

#[test]
fn wireframe_vertices_lie_on_unit_sphere() {
    let (positions, _) = wireframe_sphere(8, 6);
    for p in positions {
        let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-5);
    }
}

#[test]
fn wireframe_segment_counts_are_clamped() {
    let (positions, indices) = wireframe_sphere(0, 0);
    assert_eq!(positions.len(), 4 * 3);
    assert_eq!(indices.len(), 2 * 3 * 3);
}

#[test]
fn wireframe_poles_are_top_and_bottom() {
    let (positions, _) = wireframe_sphere(4, 4);
    assert!((positions[0][1] - 1.0).abs() < 1e-6);
    assert!((positions[positions.len() - 1][1] + 1.0).abs() < 1e-6);
}
