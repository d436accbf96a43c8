//! Initial placement of fish, sharks and kelp
//!
//! Every draw comes from the one injected random source, in a fixed order per
//! entity, so a seed reproduces the whole layout.

use std::f32::consts::TAU;

use glam::Vec3;

use super::creature::{Creature, CreatureKind, Plant};
use super::heightfield::Heightfield;
use super::rng::RandomSource;
use crate::Settings;
use crate::consts::*;
use crate::geometry::{Mesh, fish_mesh, kelp_mesh, shark_mesh};
use crate::scene::{Appearance, RenderId, SceneHost};

/// Size, motion and depth parameters for a swimming archetype
#[derive(Debug, Clone, Copy)]
pub struct Archetype {
    pub kind: CreatureKind,
    pub length: (f32, f32),
    pub height_ratio: f32,
    pub width_ratio: f32,
    pub speed: (f32, f32),
    pub turn_speed: (f32, f32),
    /// Lowest spawn height above the seafloor
    pub min_above: f32,
    /// Highest spawn height above the seafloor
    pub cap_above: f32,
    pub build: fn(f32, f32, f32) -> Mesh,
}

impl Archetype {
    pub const FISH: Archetype = Archetype {
        kind: CreatureKind::Fish,
        length: FISH_LENGTH,
        height_ratio: FISH_HEIGHT_RATIO,
        width_ratio: FISH_WIDTH_RATIO,
        speed: FISH_SPEED,
        turn_speed: FISH_TURN_SPEED,
        min_above: FISH_SPAWN_MIN_ABOVE,
        cap_above: FISH_SPAWN_CAP_ABOVE,
        build: fish_mesh,
    };

    pub const SHARK: Archetype = Archetype {
        kind: CreatureKind::Shark,
        length: SHARK_LENGTH,
        height_ratio: SHARK_HEIGHT_RATIO,
        width_ratio: SHARK_WIDTH_RATIO,
        speed: SHARK_SPEED,
        turn_speed: SHARK_TURN_SPEED,
        min_above: SHARK_SPAWN_MIN_ABOVE,
        cap_above: SHARK_SPAWN_CAP_ABOVE,
        build: shark_mesh,
    };
}

/// Raise `y` to at least `min_above` over the floor
#[inline]
pub fn clamp_to_floor(y: f32, floor: f32, min_above: f32) -> f32 {
    y.max(floor + min_above)
}

/// Spawn height for a unit draw `r`: inside the archetype band, kept below the
/// depth ceiling, but never closer to the floor than `min_above`
pub fn spawn_height(floor: f32, r: f32, archetype: &Archetype, ceiling: f32) -> f32 {
    let band = archetype.cap_above - archetype.min_above;
    let y = floor + archetype.min_above + r * band;
    clamp_to_floor(y.min(ceiling), floor, archetype.min_above)
}

/// Materials shared (then tinted) across a spawn batch
pub struct Palette<M> {
    pub fish: M,
    pub shark: M,
    pub kelp: M,
}

impl<M> Palette<M> {
    pub fn create<H: SceneHost<Material = M>>(host: &mut H) -> Self {
        Self {
            fish: host.create_material(&Appearance::FISH),
            shark: host.create_material(&Appearance::SHARK),
            kelp: host.create_material(&Appearance::KELP),
        }
    }
}

/// Everything a spawn pass produced
#[derive(Debug, Default)]
pub struct Population {
    pub creatures: Vec<Creature>,
    pub plants: Vec<Plant>,
}

impl Population {
    /// Render objects in spawn order
    pub fn render_ids(&self) -> Vec<RenderId> {
        self.creatures
            .iter()
            .map(|c| c.mesh)
            .chain(self.plants.iter().map(|p| p.mesh))
            .collect()
    }
}

/// Places wildlife using an injected random source
pub struct Spawner<'a, R: RandomSource> {
    rng: &'a mut R,
    settings: &'a Settings,
}

impl<'a, R: RandomSource> Spawner<'a, R> {
    pub fn new(rng: &'a mut R, settings: &'a Settings) -> Self {
        Self { rng, settings }
    }

    /// Uniform point in [-radius, radius]²
    fn horizontal(&mut self) -> (f32, f32) {
        let r = self.settings.spawn_radius;
        let x = self.rng.symmetric(r);
        let z = self.rng.symmetric(r);
        (x, z)
    }

    /// Spawn the configured fish, sharks and kelp
    pub fn populate<H: SceneHost, F: Heightfield>(
        &mut self,
        host: &mut H,
        floor: &F,
    ) -> Population {
        let palette = Palette::create(host);
        let mut population = Population::default();
        population.creatures.reserve(self.settings.fish_count + self.settings.shark_count);
        population.plants.reserve(self.settings.plant_count);

        for _ in 0..self.settings.fish_count {
            let fish = self.spawn_creature(host, &palette.fish, floor, &Archetype::FISH);
            population.creatures.push(fish);
        }
        log::debug!("Spawned {} fish", self.settings.fish_count);

        for _ in 0..self.settings.shark_count {
            let shark = self.spawn_creature(host, &palette.shark, floor, &Archetype::SHARK);
            population.creatures.push(shark);
        }
        log::debug!("Spawned {} sharks", self.settings.shark_count);

        for _ in 0..self.settings.plant_count {
            let plant = self.spawn_kelp(host, &palette.kelp, floor);
            population.plants.push(plant);
        }
        log::debug!("Spawned {} kelp plants", self.settings.plant_count);

        population
    }

    /// Place one swimming creature
    pub fn spawn_creature<H: SceneHost, F: Heightfield>(
        &mut self,
        host: &mut H,
        material: &H::Material,
        floor: &F,
        archetype: &Archetype,
    ) -> Creature {
        let (x, z) = self.horizontal();
        let floor_y = floor.height_at_world_clamped(x, z);

        let length = self.rng.in_range(archetype.length);
        let height = length * archetype.height_ratio;
        let width = length * archetype.width_ratio;
        let mesh = (archetype.build)(length, height, width);

        let y = spawn_height(
            floor_y,
            self.rng.next(),
            archetype,
            self.settings.depth_ceiling(),
        );

        let speed = self.rng.in_range(archetype.speed);
        let turn_speed = self.rng.in_range(archetype.turn_speed);
        let wander_angle = self.rng.next() * TAU;
        let vertical = self.rng.symmetric(SPAWN_VERTICAL_JITTER);
        let wander_timer = self.rng.in_range(WANDER_INTERVAL);

        let shade = self.rng.in_range(TINT_SHADE);
        let material = host.tint(material, shade);
        let id = host.add_mesh(mesh, material);

        Creature::new(
            id,
            archetype.kind,
            Vec3::new(x, y, z),
            speed,
            turn_speed,
            wander_angle,
            wander_timer,
            vertical,
            length * 0.5,
        )
    }

    /// Plant one kelp blade on the seafloor with a random yaw
    pub fn spawn_kelp<H: SceneHost, F: Heightfield>(
        &mut self,
        host: &mut H,
        material: &H::Material,
        floor: &F,
    ) -> Plant {
        let (x, z) = self.horizontal();
        let floor_y = floor.height_at_world_clamped(x, z);

        let height = self.rng.in_range(KELP_HEIGHT);
        let width = self.rng.in_range(KELP_WIDTH);
        let yaw = self.rng.next() * TAU;

        let id = host.add_mesh(kelp_mesh(height, width), material.clone());
        Plant::new(id, Vec3::new(x, floor_y, z), yaw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneBuffer;
    use crate::sim::heightfield::{FlatSeafloor, RollingSeafloor};
    use crate::sim::rng::SeededRandom;
    use crate::sim::rng::test_support::ScriptedRandom;

    fn settings(fish: usize, sharks: usize, plants: usize) -> Settings {
        Settings {
            fish_count: fish,
            shark_count: sharks,
            plant_count: plants,
            ..Settings::default()
        }
    }

    #[test]
    fn test_single_fish_on_flat_floor() {
        let settings = settings(1, 0, 0);
        let mut rng = SeededRandom::new(42);
        let mut scene = SceneBuffer::new();
        let floor = FlatSeafloor::new(0.0, 400.0);

        let population = Spawner::new(&mut rng, &settings).populate(&mut scene, &floor);

        assert_eq!(population.creatures.len(), 1);
        let fish = &population.creatures[0];
        assert!((3.0..=40.0).contains(&fish.position.y));
        assert!((fish.velocity.length() - fish.speed).abs() < 1e-4);
        assert!(fish.position.x.abs() <= 300.0 && fish.position.z.abs() <= 300.0);
    }

    #[test]
    fn test_spawn_is_reproducible() {
        let settings = settings(20, 3, 50);
        let floor = RollingSeafloor::default();

        let run = || {
            let mut rng = SeededRandom::new(2024);
            let mut scene = SceneBuffer::new();
            let population = Spawner::new(&mut rng, &settings).populate(&mut scene, &floor);
            (population, scene)
        };
        let (a, scene_a) = run();
        let (b, scene_b) = run();

        for (ca, cb) in a.creatures.iter().zip(&b.creatures) {
            assert_eq!(
                ca.position.to_array().map(f32::to_bits),
                cb.position.to_array().map(f32::to_bits)
            );
            assert_eq!(ca.bounding_radius.to_bits(), cb.bounding_radius.to_bits());
            assert_eq!(ca.wander_angle.to_bits(), cb.wander_angle.to_bits());
            assert_eq!(ca.speed.to_bits(), cb.speed.to_bits());
        }
        for (pa, pb) in a.plants.iter().zip(&b.plants) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.yaw(), pb.yaw());
            assert_eq!(
                scene_a.object(pa.mesh).unwrap().mesh,
                scene_b.object(pb.mesh).unwrap().mesh
            );
        }
    }

    #[test]
    fn test_spawn_height_bands() {
        let fish = Archetype::FISH;
        // Deep floor: full band is available
        assert_eq!(spawn_height(-100.0, 0.0, &fish, -5.0), -97.0);
        assert_eq!(spawn_height(-100.0, 1.0, &fish, -5.0), -60.0);
        // Shallow floor: ceiling caps the band
        assert_eq!(spawn_height(-20.0, 1.0, &fish, -5.0), -5.0);
        // Floor above the ceiling: floor clearance wins
        assert_eq!(spawn_height(0.0, 0.5, &fish, -5.0), 3.0);
    }

    #[test]
    fn test_counts_and_archetypes() {
        let settings = settings(5, 2, 7);
        let mut rng = SeededRandom::new(9);
        let mut scene = SceneBuffer::new();
        let floor = RollingSeafloor::default();

        let population = Spawner::new(&mut rng, &settings).populate(&mut scene, &floor);

        assert_eq!(population.creatures.len(), 7);
        assert_eq!(population.plants.len(), 7);
        assert_eq!(population.creatures.iter().filter(|c| c.is_shark()).count(), 2);
        assert_eq!(scene.objects().len(), 14);
        assert_eq!(population.render_ids().len(), 14);

        let shark = population.creatures.iter().find(|c| c.is_shark()).unwrap();
        let mesh = &scene.object(shark.mesh).unwrap().mesh;
        assert_eq!(mesh.vertex_count(), 22);
    }

    #[test]
    fn test_kelp_sits_on_floor() {
        let settings = settings(0, 0, 30);
        let mut rng = SeededRandom::new(5);
        let mut scene = SceneBuffer::new();
        let floor = RollingSeafloor::default();

        let population = Spawner::new(&mut rng, &settings).populate(&mut scene, &floor);

        for plant in &population.plants {
            let h = floor.height_at_world_clamped(plant.position.x, plant.position.z);
            assert_eq!(plant.position.y, h);
            assert_eq!(plant.rotation.x, 0.0);
            assert!((0.0..TAU).contains(&plant.yaw()));
        }
    }

    #[test]
    fn test_creatures_get_own_material() {
        let settings = settings(3, 0, 0);
        let mut rng = SeededRandom::new(1);
        let mut scene = SceneBuffer::new();
        let floor = FlatSeafloor::new(-50.0, 400.0);

        let population = Spawner::new(&mut rng, &settings).populate(&mut scene, &floor);

        let materials: Vec<usize> = population
            .creatures
            .iter()
            .map(|c| scene.object(c.mesh).unwrap().material)
            .collect();
        assert_eq!(materials.len(), 3);
        assert!(materials[0] != materials[1] && materials[1] != materials[2]);
    }

    #[test]
    fn test_scripted_source_controls_layout() {
        let settings = settings(1, 0, 0);
        let mut rng = ScriptedRandom::constant(0.5);
        let mut scene = SceneBuffer::new();
        let floor = FlatSeafloor::new(-100.0, 400.0);

        let population = Spawner::new(&mut rng, &settings).populate(&mut scene, &floor);

        let fish = &population.creatures[0];
        assert_eq!(fish.position.x, 0.0);
        assert_eq!(fish.position.z, 0.0);
        assert_eq!(fish.position.y, -100.0 + 3.0 + 0.5 * 37.0);
        assert!((fish.wander_angle - std::f32::consts::PI).abs() < 1e-6);
        assert!((fish.bounding_radius - 1.05).abs() < 1e-5);
    }
}
