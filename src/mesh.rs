// Geometry for the gallery renderer. Kept free of GPU types so it can be
// tested on the host.

/// Unit quad on local XY facing +Z, two counter-clockwise triangles.
pub const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

/// Latitude/longitude line mesh of a unit sphere.
///
/// Returns vertex positions and a line-list index buffer: one ring per inner
/// latitude plus one meridian per longitude step. Segment counts are clamped
/// to the smallest closed shape (3 around, 2 from pole to pole).
pub fn wireframe_sphere(width_segments: u32, height_segments: u32) -> (Vec<[f32; 3]>, Vec<u32>) {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut positions = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let theta = iy as f32 / h as f32 * std::f32::consts::PI;
        for ix in 0..=w {
            let phi = ix as f32 / w as f32 * std::f32::consts::TAU;
            positions.push([
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            ]);
        }
    }
    let idx = |ix: u32, iy: u32| iy * (w + 1) + ix;
    let mut indices = Vec::with_capacity((2 * w * (2 * h - 1)) as usize);
    for iy in 1..h {
        for ix in 0..w {
            indices.push(idx(ix, iy));
            indices.push(idx(ix + 1, iy));
        }
    }
    for ix in 0..w {
        for iy in 0..h {
            indices.push(idx(ix, iy));
            indices.push(idx(ix, iy + 1));
        }
    }
    (positions, indices)
}
