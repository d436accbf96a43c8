//! Shark body: same ring layout as the fish, but with an under-slung snout,
//! flatter belly, tall asymmetric tail and a separated dorsal fin

use glam::Vec3;

use super::{Mesh, double_sided};

/// Unit-space vertices, scaled by (half length, half height, half width)
const SHARK_VERTICES: [[f32; 3]; 22] = [
    // Snout tip, above the head ring centre
    [1.0, 0.05, 0.0],
    // Head ring, dropped below the snout (top, right, bottom, left)
    [0.65, 0.35, 0.0],
    [0.65, -0.1, 0.45],
    [0.65, -0.4, 0.0],
    [0.65, -0.1, -0.45],
    // Mid ring, flat belly
    [0.1, 0.8, 0.0],
    [0.1, 0.0, 1.0],
    [0.1, -0.55, 0.0],
    [0.1, 0.0, -1.0],
    // Rear ring
    [-0.5, 0.45, 0.0],
    [-0.5, 0.0, 0.4],
    [-0.5, -0.3, 0.0],
    [-0.5, 0.0, -0.4],
    // Tail root
    [-0.8, 0.05, 0.0],
    // Tail fin: tall upper lobe, short lower lobe, trailing notch
    [-1.15, 0.95, 0.0],
    [-1.05, -0.45, 0.0],
    [-0.95, 0.1, 0.0],
    // Pectoral fin tips (right, left)
    [0.05, -0.45, 1.6],
    [0.05, -0.45, -1.6],
    // Dorsal fin tip and trailing edge
    [-0.15, 1.6, 0.0],
    [-0.25, 0.95, 0.0],
    // Dorsal fin leading root
    [0.35, 0.65, 0.0],
];

/// Closed body, wound counter-clockwise seen from outside
const SHARK_BODY: [[u16; 3]; 24] = [
    // Snout
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
const SHARK_FINS: [[u16; 3]; 6] = [
    // Tail lobes
    [13, 14, 16],
    [13, 16, 15],
    // Pectorals
    [2, 6, 17],
    [4, 8, 18],
    // Dorsal
    [21, 19, 5],
    [5, 19, 20],
];

/// Build a shark mesh for the given body dimensions
pub fn shark_mesh(length: f32, height: f32, width: f32) -> Mesh {
    let scale = Vec3::new(length, height, width) * 0.5;
    let triangles: Vec<[u16; 3]> = SHARK_BODY
        .iter()
        .copied()
        .chain(double_sided(&SHARK_FINS))
        .collect();
    Mesh::from_table(&SHARK_VERTICES, scale, &triangles)
}
