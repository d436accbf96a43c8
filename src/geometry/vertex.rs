//! Interleaved vertex format handed to the host for GPU upload

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Position + normal, tightly packed
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    /// Floats per vertex
    pub const STRIDE: usize = 6;
}

/// Base colors for wildlife materials
pub mod colors {
    pub const FISH: [f32; 3] = [0.85, 0.62, 0.28];
    pub const SHARK: [f32; 3] = [0.42, 0.48, 0.55];
    pub const KELP: [f32; 3] = [0.18, 0.42, 0.16];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(
            std::mem::size_of::<MeshVertex>(),
            MeshVertex::STRIDE * std::mem::size_of::<f32>()
        );
        let v = [MeshVertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y)];
        let floats: &[f32] = bytemuck::cast_slice(&v);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 1.0, 0.0]);
    }
}
