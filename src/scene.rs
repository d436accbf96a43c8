//! Render capability driven by the simulation
//!
//! The host scene graph (three.js on the web page, or an in-memory buffer in
//! tests and the headless runner) implements `SceneHost`. The simulation only
//! constructs objects, clones/tints materials and sets poses.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::Mesh;
use crate::geometry::vertex::colors;

/// Opaque handle to one renderable object in the host scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderId(pub u32);

/// Visual appearance requested for a material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub color: [f32; 3],
    pub roughness: f32,
    /// Render back faces too (fins, kelp blades)
    pub double_sided: bool,
}

impl Appearance {
    pub const FISH: Appearance = Appearance {
        color: colors::FISH,
        roughness: 0.55,
        double_sided: true,
    };
    pub const SHARK: Appearance = Appearance {
        color: colors::SHARK,
        roughness: 0.7,
        double_sided: true,
    };
    pub const KELP: Appearance = Appearance {
        color: colors::KELP,
        roughness: 0.9,
        double_sided: true,
    };

    /// Same appearance with the color scaled by `shade`
    pub fn shaded(&self, shade: f32) -> Self {
        Self {
            color: self.color.map(|c| (c * shade).clamp(0.0, 1.0)),
            ..*self
        }
    }
}

/// Scene graph operations the simulation needs from its host
pub trait SceneHost {
    /// Material handle; cloning must not share mutable state
    type Material: Clone;

    fn create_material(&mut self, appearance: &Appearance) -> Self::Material;

    /// Independent copy of `material` with its color scaled by `shade`
    fn tint(&mut self, material: &Self::Material, shade: f32) -> Self::Material;

    /// Attach a mesh to the scene; the host takes ownership of the geometry
    fn add_mesh(&mut self, mesh: Mesh, material: Self::Material) -> RenderId;

    /// Update an object's position and Euler rotation (x roll, y yaw, z pitch)
    fn set_pose(&mut self, id: RenderId, position: Vec3, rotation: Vec3);
}

/// A renderable object stored in a `SceneBuffer`
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub mesh: Mesh,
    pub material: usize,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// In-memory scene: keeps geometry, materials and the latest poses
#[derive(Debug, Clone, Default)]
pub struct SceneBuffer {
    materials: Vec<Appearance>,
    objects: Vec<SceneObject>,
}

impl SceneBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, id: RenderId) -> Option<&SceneObject> {
        self.objects.get(id.0 as usize)
    }

    pub fn material(&self, index: usize) -> Option<&Appearance> {
        self.materials.get(index)
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Appearance used by an object
    pub fn appearance_of(&self, id: RenderId) -> Option<&Appearance> {
        self.object(id).and_then(|o| self.material(o.material))
    }

    /// Poses packed as `[x, y, z, rx, ry, rz]` per object
    pub fn pose_data(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.objects.len() * 6);
        for object in &self.objects {
            out.extend_from_slice(&object.position.to_array());
            out.extend_from_slice(&object.rotation.to_array());
        }
        out
    }
}

impl SceneHost for SceneBuffer {
    type Material = usize;

    fn create_material(&mut self, appearance: &Appearance) -> usize {
        self.materials.push(*appearance);
        self.materials.len() - 1
    }

    fn tint(&mut self, material: &usize, shade: f32) -> usize {
        let base = self.materials.get(*material).copied().unwrap_or(Appearance::FISH);
        self.create_material(&base.shaded(shade))
    }

    fn add_mesh(&mut self, mesh: Mesh, material: usize) -> RenderId {
        let id = RenderId(self.objects.len() as u32);
        self.objects.push(SceneObject {
            mesh,
            material,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        });
        id
    }

    fn set_pose(&mut self, id: RenderId, position: Vec3, rotation: Vec3) {
        if let Some(object) = self.objects.get_mut(id.0 as usize) {
            object.position = position;
            object.rotation = rotation;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::kelp_mesh;

    #[test]
    fn test_tint_is_independent_copy() {
        let mut scene = SceneBuffer::new();
        let base = scene.create_material(&Appearance::FISH);
        let tinted = scene.tint(&base, 0.5);
        assert_ne!(base, tinted);
        assert_eq!(scene.material(base), Some(&Appearance::FISH));
        let color = scene.material(tinted).unwrap().color;
        assert!((color[0] - Appearance::FISH.color[0] * 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_shade_clamps() {
        let bright = Appearance::FISH.shaded(10.0);
        assert!(bright.color.iter().all(|&c| c <= 1.0));
    }

    #[test]
    fn test_set_pose_and_export() {
        let mut scene = SceneBuffer::new();
        let material = scene.create_material(&Appearance::KELP);
        let a = scene.add_mesh(kelp_mesh(5.0, 1.0), material);
        let b = scene.add_mesh(kelp_mesh(6.0, 1.0), material);
        scene.set_pose(b, Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.1, 0.2, 0.3));

        assert_eq!(a, RenderId(0));
        assert_eq!(scene.appearance_of(b), Some(&Appearance::KELP));
        let poses = scene.pose_data();
        assert_eq!(poses.len(), 12);
        assert_eq!(&poses[6..], &[1.0, 2.0, 3.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut scene = SceneBuffer::new();
        scene.set_pose(RenderId(9), Vec3::ONE, Vec3::ONE);
        assert!(scene.objects().is_empty());
    }
}
