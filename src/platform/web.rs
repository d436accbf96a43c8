//! Browser bindings
//!
//! The page owns the three.js scene. It creates a `WildlifeHandle` with its
//! terrain heights, builds one three.js mesh per object from the exported
//! geometry, then copies `poses()` onto those meshes every frame.

use js_sys::{Float32Array, Uint16Array};
use wasm_bindgen::prelude::*;

use crate::Settings;
use crate::geometry::MeshVertex;
use crate::scene::SceneBuffer;
use crate::sim::{GridHeightfield, Simulation};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    super::init_logging();
    log::info!("Seafloor wildlife module loaded");
}

/// One running wildlife simulation plus its exported scene
#[wasm_bindgen]
pub struct WildlifeHandle {
    sim: Simulation,
    scene: SceneBuffer,
    floor: GridHeightfield,
}

impl WildlifeHandle {
    fn build(
        settings: Settings,
        heights: Vec<f32>,
        resolution: usize,
        half_size: f32,
    ) -> Result<Self, JsValue> {
        let floor = GridHeightfield::new(heights, resolution, half_size)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut scene = SceneBuffer::new();
        let mut sim = Simulation::from_settings(settings);
        sim.start(&mut scene, &floor);
        log::info!(
            "Scene holds {} objects over {} materials",
            scene.objects().len(),
            scene.material_count()
        );
        Ok(Self { sim, scene, floor })
    }
}

#[wasm_bindgen]
impl WildlifeHandle {
    /// Default population seeded with `seed`
    #[wasm_bindgen(constructor)]
    pub fn new(
        seed: u64,
        heights: Vec<f32>,
        resolution: usize,
        half_size: f32,
    ) -> Result<WildlifeHandle, JsValue> {
        Self::build(Settings::with_seed(seed), heights, resolution, half_size)
    }

    /// Population described by a settings JSON document
    pub fn with_settings(
        json: &str,
        heights: Vec<f32>,
        resolution: usize,
        half_size: f32,
    ) -> Result<WildlifeHandle, JsValue> {
        let settings = Settings::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::build(settings, heights, resolution, half_size)
    }

    /// Advance one frame and refresh the exported poses
    pub fn update(&mut self, delta: f32, time: f32) {
        let delta = super::frame_delta(delta);
        self.sim.update(&self.floor, delta, time);
        self.sim.present(&mut self.scene);
    }

    pub fn object_count(&self) -> usize {
        self.scene.objects().len()
    }

    /// `[x, y, z, rx, ry, rz]` per object, in object order
    pub fn poses(&self) -> Float32Array {
        Float32Array::from(self.scene.pose_data().as_slice())
    }

    /// Interleaved position + normal floats for one object's mesh
    pub fn mesh_vertices(&self, index: usize) -> Float32Array {
        let vertices: Vec<MeshVertex> = self
            .scene
            .objects()
            .get(index)
            .map(|o| o.mesh.vertices())
            .unwrap_or_default();
        Float32Array::from(bytemuck::cast_slice::<MeshVertex, f32>(&vertices))
    }

    /// Triangle indices for one object's mesh
    pub fn mesh_indices(&self, index: usize) -> Uint16Array {
        let indices = self
            .scene
            .objects()
            .get(index)
            .map(|o| o.mesh.index_data())
            .unwrap_or_default();
        Uint16Array::from(indices.as_slice())
    }

    /// RGB color of an object's material
    pub fn material_color(&self, index: usize) -> Float32Array {
        let color = self
            .scene
            .objects()
            .get(index)
            .and_then(|o| self.scene.material(o.material))
            .map(|a| a.color)
            .unwrap_or([1.0; 3]);
        Float32Array::from(&color[..])
    }
}
