//! Fish body: tapered ellipsoid with tail, pectoral and dorsal fins

use glam::Vec3;

use super::{Mesh, double_sided};

/// Unit-space vertices, scaled by (half length, half height, half width)
const FISH_VERTICES: [[f32; 3]; 19] = [
    // Nose
    [1.0, 0.0, 0.0],
    // Head ring (top, right, bottom, left)
    [0.6, 0.55, 0.0],
    [0.6, 0.0, 0.6],
    [0.6, -0.5, 0.0],
    [0.6, 0.0, -0.6],
    // Mid ring, widest point
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, -0.9, 0.0],
    [0.0, 0.0, -1.0],
    // Rear ring
    [-0.6, 0.5, 0.0],
    [-0.6, 0.0, 0.45],
    [-0.6, -0.45, 0.0],
    [-0.6, 0.0, -0.45],
    // Tail root
    [-0.85, 0.0, 0.0],
    // Tail fin tips (top, bottom)
    [-1.0, 0.6, 0.0],
    [-1.0, -0.6, 0.0],
    // Pectoral fin tips (right, left)
    [0.1, -0.3, 1.5],
    [0.1, -0.3, -1.5],
    // Dorsal fin tip
    [-0.2, 1.5, 0.0],
];

/// Closed body, wound counter-clockwise seen from outside
const FISH_BODY: [[u16; 3]; 24] = [
    // Nose cap
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 1],
    // Head -> mid
    [1, 5, 2],
    [2, 5, 6],
    [2, 6, 3],
    [3, 6, 7],
    [3, 7, 4],
    [4, 7, 8],
    [4, 8, 1],
    [1, 8, 5],
    // Mid -> rear
    [5, 9, 6],
    [6, 9, 10],
    [6, 10, 7],
    [7, 10, 11],
    [7, 11, 8],
    [8, 11, 12],
    [8, 12, 5],
    [5, 12, 9],
    // Rear -> tail root
    [9, 13, 10],
    [10, 13, 11],
    [11, 13, 12],
    [12, 13, 9],
];

/// Flat fins, emitted with both windings
const FISH_FINS: [[u16; 3]; 4] = [
    // Tail
    [13, 14, 15],
    // Pectorals
    [2, 6, 16],
    [4, 8, 17],
    // Dorsal
    [5, 9, 18],
];

/// Build a fish mesh for the given body dimensions
pub fn fish_mesh(length: f32, height: f32, width: f32) -> Mesh {
    let scale = Vec3::new(length, height, width) * 0.5;
    let triangles: Vec<[u16; 3]> = FISH_BODY
        .iter()
        .copied()
        .chain(double_sided(&FISH_FINS))
        .collect();
    Mesh::from_table(&FISH_VERTICES, scale, &triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test_support::assert_valid;

    #[test]
    fn test_fish_topology() {
        let mesh = fish_mesh(2.0, 0.8, 0.5);
        assert_eq!(mesh.vertex_count(), 19);
        assert_eq!(mesh.triangle_count(), 24 + 8);
        assert_valid(&mesh);
    }

    #[test]
    fn test_fish_extent_matches_dimensions() {
        let mesh = fish_mesh(3.0, 1.0, 0.6);
        let (lo, hi) = mesh.bounds();
        assert!((hi.x - 1.5).abs() < 1e-6);
        assert!((lo.x + 1.5).abs() < 1e-6);
        // Dorsal fin rises above the body
        assert!(hi.y > 0.5);
        // Pectorals stick out past the body width
        assert!(hi.z > 0.3 && lo.z < -0.3);
    }

    #[test]
    fn test_body_normals_face_outward() {
        let mesh = fish_mesh(2.0, 1.0, 1.0);
        // Nose points forward, belly points down
        assert!(mesh.normals()[0].x > 0.9);
        assert!(mesh.normals()[7].y < -0.5);
        // Mid ring right side faces +Z even with the pectoral attached
        assert!(mesh.normals()[6].z > 0.5);
    }

    #[test]
    fn test_fish_builder_is_pure() {
        assert_eq!(fish_mesh(1.7, 0.6, 0.4), fish_mesh(1.7, 0.6, 0.4));
    }
}
