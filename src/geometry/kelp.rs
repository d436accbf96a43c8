//! Kelp blade: a stack of tapered quads with a baked S-curve
//!
//! The back face gets its own copy of the vertices so its normals point the
//! other way instead of cancelling the front.

use std::f32::consts::TAU;

use glam::Vec3;

use super::Mesh;

/// Quad segments from base to tip
pub const KELP_SEGMENTS: u16 = 7;
/// Fraction of the base width lost at the tip
pub const KELP_TAPER: f32 = 0.4;
/// Sideways S-curve amplitude as a fraction of blade width
const KELP_CURVE: f32 = 0.5;

/// Build a kelp blade `height` tall and `width` wide at the base
pub fn kelp_mesh(height: f32, width: f32) -> Mesh {
    let rows = KELP_SEGMENTS + 1;
    let mut positions = Vec::with_capacity(rows as usize * 4);

    for i in 0..rows {
        let t = i as f32 / KELP_SEGMENTS as f32;
        let y = t * height;
        let half = width * 0.5 * (1.0 - KELP_TAPER * t);
        let offset = (t * TAU * 0.75).sin() * width * KELP_CURVE;
        positions.push(Vec3::new(offset - half, y, 0.0));
        positions.push(Vec3::new(offset + half, y, 0.0));
    }

    // Back face copy
    let back = positions.len() as u16;
    positions.extend_from_within(..);

    let mut triangles = Vec::with_capacity(KELP_SEGMENTS as usize * 4);
    for i in 0..KELP_SEGMENTS {
        let l0 = i * 2;
        let r0 = l0 + 1;
        let l1 = l0 + 2;
        let r1 = l0 + 3;
        // Front (+Z)
        triangles.push([l0, r0, r1]);
        triangles.push([l0, r1, l1]);
        // Back (-Z)
        triangles.push([back + l0, back + r1, back + r0]);
        triangles.push([back + l0, back + l1, back + r1]);
    }

    Mesh::new(positions, triangles)
}
